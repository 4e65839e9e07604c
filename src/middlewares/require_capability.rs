/*!
 * 基于能力的访问控制中间件
 *
 * 必须在 RequireJWT 之后使用：根据令牌中的角色判断是否拥有所需能力，
 * 没有认证主体返回 401，缺少能力返回 403。
 *
 * ```rust,ignore
 * web::scope("/api/teachers")
 *     .wrap(RequireCapability::new(Capability::ListTeachers))
 *     .wrap(RequireJWT)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    auth::{Capability, Principal},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireCapability {
    capability: Capability,
}

impl RequireCapability {
    pub fn new(capability: Capability) -> Self {
        Self { capability }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireCapability
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireCapabilityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireCapabilityMiddleware {
            service: Rc::new(service),
            capability: self.capability,
        }))
    }
}

pub struct RequireCapabilityMiddleware<S> {
    service: Rc<S>,
    capability: Capability,
}

impl<S, B> Service<ServiceRequest> for RequireCapabilityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let capability = self.capability;

        Box::pin(async move {
            let principal = req.extensions().get::<Principal>().cloned();

            match principal {
                Some(principal) if principal.can(capability) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(principal) => {
                    info!(
                        "Access denied for teacher {} (role: {}). Required capability: {:?}",
                        principal.teacher_id, principal.role, capability
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::Forbidden,
                            "Forbidden",
                        )
                        .map_into_right_body(),
                    ))
                }
                None => {
                    info!(
                        "Capability check failed: no principal in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
