pub mod auth;
pub mod common;
pub mod course_requests;
pub mod courses;
pub mod teachers;

pub use common::response::ApiResponse;

/// 程序启动时间，用于启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码（写入 ApiResponse.code）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    RateLimitExceeded = 1029,

    // 认证错误
    AuthFailed = 2000,
    PasswordMismatch = 2001,

    // 课程与调整申请
    CourseNotFound = 3000,
    CoursePermissionDenied = 3001,
    CourseRequestInvalid = 3002,
}
