use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{access, error_response, unauthorized_response};

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(principal) = RequireJWT::extract_principal(request) else {
        return Ok(unauthorized_response());
    };

    let storage = service.get_storage(request);
    match storage.list_teachers(access::teacher_scope(&principal)).await {
        Ok(teachers) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(teachers, "Teachers retrieved")))
        }
        Err(e) => Ok(error_response(e, ErrorCode::InternalServerError)),
    }
}
