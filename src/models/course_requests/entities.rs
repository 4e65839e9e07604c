use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已保存的调整申请（含申请教师姓名）
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course_request.ts")]
pub struct CourseRequestRecord {
    pub request_id: i64,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
    pub number_student: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}
