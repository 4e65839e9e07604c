use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseRequestService, authorize_course, error_code};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, auth::Principal, course_requests::entities::CourseRequestRecord,
};
use crate::services::{error_response, unauthorized_response};
use crate::storage::Storage;

/// 查询课程的全部调整申请（最早的在前）
pub async fn list_course_requests(
    storage: &dyn Storage,
    principal: &Principal,
    course_id: i32,
) -> Result<Vec<CourseRequestRecord>> {
    let course = authorize_course(storage, principal, course_id).await?;
    storage.list_course_requests(course.id).await
}

pub async fn handle_list(
    service: &CourseRequestService,
    request: &HttpRequest,
    course_id: i32,
) -> ActixResult<HttpResponse> {
    let Some(principal) = RequireJWT::extract_principal(request) else {
        return Ok(unauthorized_response());
    };

    let storage = service.get_storage(request);
    match list_course_requests(storage.as_ref(), &principal, course_id).await {
        Ok(records) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(records, "Requests retrieved")))
        }
        Err(err) => {
            let code = error_code(&err);
            Ok(error_response(err, code))
        }
    }
}
