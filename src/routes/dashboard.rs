use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireCapability};
use crate::models::auth::Capability;
use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

// 本科课程看板（按角色过滤）
pub async fn list_undergraduate(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.list_undergraduate(&req).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/undergraduate")
                    .route(web::get().to(list_undergraduate))
                    .wrap(RequireCapability::new(Capability::ViewCourses)),
            ),
    );
}
