use serde::Serialize;
use ts_rs::TS;

/// 提交调整申请的确认
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_request.ts")]
pub struct SubmitCourseRequestsResponse {
    pub success: bool,
    pub created: u64,
}
