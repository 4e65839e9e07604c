use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单条分配：把课程的一部分学生数或课时量分给某位教师
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course_request.ts")]
pub struct AllocationEntry {
    pub teacher_id: String,
    pub number_student: i32,
    pub quantity: i32,
}

/// 提交调整申请请求体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_request.ts")]
pub struct SubmitCourseRequestsRequest {
    pub requests: Vec<AllocationEntry>,
}
