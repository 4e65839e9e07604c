//! 课程调整申请：提交与查询
//!
//! 路由上的 `RequireCapability` 先拒绝无管理能力的角色；两个端点随后共用
//! 同一套流程：解析课程（不存在返回 404），再检查院系归属。

pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use async_trait::async_trait;
use std::sync::Arc;

use crate::allocation::RequestSink;
use crate::config::{AppConfig, RequestPolicyConfig};
use crate::errors::{CourseLoadError, Result};
use crate::models::{
    ErrorCode,
    auth::Principal,
    course_requests::requests::{AllocationEntry, SubmitCourseRequestsRequest},
    courses::entities::Course,
};
use crate::services::access;
use crate::storage::Storage;

pub use list::list_course_requests;
pub use submit::submit_course_requests;

pub struct CourseRequestService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseRequestService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_policy(&self) -> &RequestPolicyConfig {
        &AppConfig::get().requests
    }

    // 提交调整申请
    pub async fn submit(
        &self,
        request: &HttpRequest,
        course_id: i32,
        body: SubmitCourseRequestsRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit(self, request, course_id, body).await
    }

    // 查看调整申请
    pub async fn list(&self, request: &HttpRequest, course_id: i32) -> ActixResult<HttpResponse> {
        list::handle_list(self, request, course_id).await
    }
}

/// 解析课程并检查调用者是否可以管理它的调整申请
pub async fn authorize_course(
    storage: &dyn Storage,
    principal: &Principal,
    course_id: i32,
) -> Result<Course> {
    let course = storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| CourseLoadError::not_found(format!("Course {course_id} not found")))?;

    access::authorize_course_requests(principal, &course)?;
    Ok(course)
}

pub(crate) fn error_code(err: &CourseLoadError) -> ErrorCode {
    match err {
        CourseLoadError::Validation(_) => ErrorCode::CourseRequestInvalid,
        CourseLoadError::NotFound(_) => ErrorCode::CourseNotFound,
        CourseLoadError::Authorization(_) => ErrorCode::CoursePermissionDenied,
        CourseLoadError::Authentication(_) => ErrorCode::Unauthorized,
        _ => ErrorCode::InternalServerError,
    }
}

/// 直接写入存储的提交通道（服务端驱动分配编辑器时使用）
pub struct StorageRequestSink {
    storage: Arc<dyn Storage>,
    principal: Principal,
    policy: RequestPolicyConfig,
}

impl StorageRequestSink {
    pub fn new(storage: Arc<dyn Storage>, principal: Principal, policy: RequestPolicyConfig) -> Self {
        Self {
            storage,
            principal,
            policy,
        }
    }
}

#[async_trait]
impl RequestSink for StorageRequestSink {
    async fn submit(&self, course_id: i32, entries: Vec<AllocationEntry>) -> Result<u64> {
        submit_course_requests(
            self.storage.as_ref(),
            &self.policy,
            &self.principal,
            course_id,
            entries,
        )
        .await
    }
}
