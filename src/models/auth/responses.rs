use serde::Serialize;
use ts_rs::TS;

use super::entities::Role;

// 登录响应模型
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub teacher_id: String,
    pub email: String,
    pub teacher_name: Option<String>,
    pub department_id: Option<i32>,
}
