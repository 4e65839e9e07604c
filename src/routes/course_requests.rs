use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireCapability};
use crate::models::auth::Capability;
use crate::models::course_requests::requests::SubmitCourseRequestsRequest;
use crate::services::CourseRequestService;
use crate::utils::SafeCourseId;

// 懒加载的全局 CourseRequestService 实例
static COURSE_REQUEST_SERVICE: Lazy<CourseRequestService> =
    Lazy::new(CourseRequestService::new_lazy);

// 提交调整申请
pub async fn submit_course_requests(
    req: HttpRequest,
    course_id: SafeCourseId,
    body: web::Json<SubmitCourseRequestsRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_REQUEST_SERVICE
        .submit(&req, course_id.0, body.into_inner())
        .await
}

// 查看调整申请
pub async fn list_course_requests(
    req: HttpRequest,
    course_id: SafeCourseId,
) -> ActixResult<HttpResponse> {
    COURSE_REQUEST_SERVICE.list(&req, course_id.0).await
}

// 配置路由
pub fn configure_course_requests_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{course_id}/requests")
                    // 院系归属在业务层检查
                    .route(web::get().to(list_course_requests))
                    .route(web::post().to(submit_course_requests))
                    .wrap(RequireCapability::new(Capability::ManageCourseRequests)),
            ),
    );
}
