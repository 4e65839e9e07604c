use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Teacher;

/// 教师列表项
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherSummary {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<i32>,
}

impl From<Teacher> for TeacherSummary {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            name: Some(teacher.name),
            email: teacher.email,
            department_id: teacher.department_id,
        }
    }
}
