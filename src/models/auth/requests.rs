use serde::Deserialize;
use ts_rs::TS;

// 教师登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 登录邮箱，大小写不敏感
    pub email: String,
    pub password: String,
}
