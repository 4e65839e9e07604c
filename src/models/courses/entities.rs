use serde::{Deserialize, Serialize};

use crate::allocation::CourseTotals;

// 课程实体（授权与容量校验所需的字段）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i32,
    pub course_name: String,
    pub department_id: Option<i32>,
    pub teacher_id: Option<String>,
    pub number_student: Option<i32>,
    pub quantity: Option<i32>,
}

impl Course {
    /// 课程可拆分的原始总量（空值按 0 处理）
    pub fn totals(&self) -> CourseTotals {
        CourseTotals::from_columns(self.number_student, self.quantity)
    }
}
