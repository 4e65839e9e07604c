use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::DashboardService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{access, error_response, unauthorized_response};

pub async fn list_undergraduate(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(principal) = RequireJWT::extract_principal(request) else {
        return Ok(unauthorized_response());
    };

    let storage = service.get_storage(request);
    let scope = access::course_scope(&principal);
    debug!("Listing undergraduate courses for {} with {:?}", principal.teacher_id, scope);

    match storage.list_undergraduate_courses(scope).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(ApiResponse::success(rows, "Courses retrieved"))),
        Err(e) => Ok(error_response(e, ErrorCode::InternalServerError)),
    }
}
