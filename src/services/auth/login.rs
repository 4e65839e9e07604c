use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::config::AuthConfig;
use crate::errors::{CourseLoadError, Result};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse, Principal},
};
use crate::services::{access, error_response};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;
use crate::utils::validate::{normalize_email, validate_email};

use super::AuthService;

/// 校验凭据并签发令牌
///
/// 未知邮箱或账号没有密码返回认证错误 (401)，密码不匹配返回授权错误 (403)。
pub async fn authenticate(
    storage: &dyn Storage,
    auth: &AuthConfig,
    login_request: LoginRequest,
) -> Result<LoginResponse> {
    let email = normalize_email(&login_request.email);
    validate_email(&email).map_err(CourseLoadError::validation)?;

    let teacher = storage
        .get_teacher_by_email(&email)
        .await?
        .ok_or_else(|| CourseLoadError::authentication("Invalid credentials"))?;

    let password_hash = teacher
        .password_hash
        .as_deref()
        .ok_or_else(|| CourseLoadError::authentication("Invalid credentials"))?;

    if !verify_password(&login_request.password, password_hash) {
        return Err(CourseLoadError::authorization("Invalid credentials"));
    }

    let role = access::resolve_role(storage, auth, &teacher.id, &email).await?;
    let principal = Principal {
        role,
        teacher_id: teacher.id.clone(),
        email: email.clone(),
        department_id: teacher.department_id,
    };
    let token = JwtUtils::generate_access_token(&principal)?;

    Ok(LoginResponse {
        token,
        role,
        teacher_id: teacher.id,
        email: teacher.email.unwrap_or(email),
        teacher_name: Some(teacher.name),
        department_id: teacher.department_id,
    })
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    match authenticate(storage.as_ref(), &config.auth, login_request).await {
        Ok(response) => {
            info!(
                "Teacher {} logged in as {}",
                response.teacher_id, response.role
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(err) => {
            let code = match &err {
                CourseLoadError::Validation(_) => ErrorCode::BadRequest,
                CourseLoadError::Authorization(_) => ErrorCode::PasswordMismatch,
                _ => ErrorCode::AuthFailed,
            };
            Ok(error_response(err, code))
        }
    }
}
