use crate::config::AppConfig;
use crate::models::auth::{Principal, Role};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: String,                // Subject (教师编号)
    pub role: Role,                 // 登录时解析出的角色
    pub teacher_id: String,         // 教师编号
    pub email: String,              // 登录邮箱（小写）
    pub department_id: Option<i32>, // 所属院系
    pub exp: usize,                 // Expiration time (时间戳)
    pub iat: usize,                 // Issued at (签发时间)
}

impl Claims {
    /// 还原请求主体
    pub fn into_principal(self) -> Principal {
        Principal {
            role: self.role,
            teacher_id: self.teacher_id,
            email: self.email,
            department_id: self.department_id,
        }
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token（固定有效期，不支持刷新）
    pub fn generate_access_token(
        principal: &Principal,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            principal,
            &Self::get_secret(),
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        principal: &Principal,
        secret: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: principal.teacher_id.clone(),
            role: principal.role,
            teacher_id: principal.teacher_id.clone(),
            email: principal.email.clone(),
            department_id: principal.department_id,
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 Access Token（签名 + 过期时间）
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_with_secret(token, &Self::get_secret())
    }

    pub fn verify_token_with_secret(
        token: &str,
        secret: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}
