//! 客户端会话上下文
//!
//! 保存登录后的 token 与用户信息，启动时从磁盘恢复；
//! 登出或遇到认证失败（401）时清空，强制重新登录。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{CourseLoadError, Result};
use crate::models::auth::{LoginResponse, Role};

/// 已登录用户
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub teacher_id: String,
    pub email: String,
    pub role: Role,
    pub teacher_name: Option<String>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct StoredSession {
    user: SessionUser,
    token: String,
}

/// 会话状态，未登录时为空
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<SessionUser>,
    token: Option<String>,
}

impl SessionContext {
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// 带持久化的会话
pub struct SessionStore {
    path: PathBuf,
    context: SessionContext,
}

impl SessionStore {
    /// 从文件恢复会话；文件不存在或内容损坏时视为未登录
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let context = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<StoredSession>(&content) {
                Ok(stored) => SessionContext {
                    user: Some(stored.user),
                    token: Some(stored.token),
                },
                Err(e) => {
                    warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                    SessionContext::default()
                }
            },
            Err(_) => SessionContext::default(),
        };

        Self { path, context }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// 保存登录结果
    pub fn login(&mut self, user: SessionUser, token: impl Into<String>) -> Result<()> {
        let stored = StoredSession {
            user,
            token: token.into(),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;

        debug!("Session stored for {}", stored.user.email);
        self.context = SessionContext {
            user: Some(stored.user),
            token: Some(stored.token),
        };
        Ok(())
    }

    /// 直接使用登录接口的响应
    pub fn login_with(&mut self, response: LoginResponse) -> Result<()> {
        let user = SessionUser {
            teacher_id: response.teacher_id,
            email: response.email,
            role: response.role,
            teacher_name: response.teacher_name,
            department_id: response.department_id,
        };
        self.login(user, response.token)
    }

    /// 清空内存和磁盘上的会话
    pub fn logout(&mut self) -> Result<()> {
        self.context = SessionContext::default();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CourseLoadError::file_operation(format!(
                "Failed to remove session file: {e}"
            ))),
        }
    }

    /// Authorization 请求头的值
    pub fn bearer(&self) -> Option<String> {
        self.context.token().map(|token| format!("Bearer {token}"))
    }

    /// 处理请求失败：认证错误时清空会话，返回是否需要重新登录
    pub fn handle_failure(&mut self, err: &CourseLoadError) -> bool {
        if !err.is_authentication() {
            return false;
        }
        warn!("Authentication failed, clearing session: {}", err.message());
        if let Err(e) = self.logout() {
            warn!("{}", e.format_simple());
        }
        true
    }
}
