use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RateLimit;
use crate::models::auth::requests::LoginRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

// 配置路由（限流器由调用方创建，以便在所有 worker 间共享计数）
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig, login_limit: RateLimit) {
    cfg.service(
        web::resource("/api/login")
            .wrap(login_limit)
            .route(web::post().to(login)),
    );
}
