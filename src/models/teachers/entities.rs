use serde::{Deserialize, Serialize};

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: Option<String>,
    pub department_id: Option<i32>,
}

// 院系实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub head_id: Option<String>,
}

/// 创建教师（启动时初始化管理员账号用）
#[derive(Debug, Clone)]
pub struct CreateTeacher {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub department_id: Option<i32>,
}
