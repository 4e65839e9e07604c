pub mod access;
pub mod auth;
pub mod course_requests;
pub mod dashboard;
pub mod teachers;

pub use auth::AuthService;
pub use course_requests::CourseRequestService;
pub use dashboard::DashboardService;
pub use teachers::TeacherService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::CourseLoadError;
use crate::models::{ApiResponse, ErrorCode};

/// 把服务层错误转换为统一响应
///
/// 内部错误只记录日志，对外返回通用信息。
pub(crate) fn error_response(err: CourseLoadError, code: ErrorCode) -> HttpResponse {
    if err.is_internal() {
        error!("{}", err.format_simple());
        return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Internal server error",
        ));
    }

    HttpResponse::build(err.status_code()).json(ApiResponse::error_empty(code, err.message()))
}

/// 未经过 RequireJWT 的请求
pub(crate) fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unauthorized",
    ))
}
