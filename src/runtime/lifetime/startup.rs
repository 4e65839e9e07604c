use crate::config::{AppConfig, AuthConfig};
use crate::models::teachers::entities::{CreateTeacher, Teacher};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 管理员账号的固定教师编号
pub const ADMIN_TEACHER_ID: &str = "admin";

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化管理员账号
///
/// 教师表为空时，为第一个管理员白名单邮箱创建登录账号；
/// 密码取 `password`（通常来自 ADMIN_PASSWORD），否则随机生成并打印一次。
pub async fn seed_admin(
    storage: &dyn Storage,
    auth: &AuthConfig,
    password: Option<String>,
) -> Option<Teacher> {
    match storage.count_teachers().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} teacher(s), skipping admin seed",
                count
            );
            return None;
        }
        Ok(_) => {}
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping admin seed", e);
            return None;
        }
    }

    let Some(email) = auth.admin_emails.first().cloned() else {
        warn!("No teachers found and no admin email configured (ADMIN_EMAILS), skipping admin seed");
        return None;
    };
    info!("No teachers found in database, creating admin account for {}...", email);

    // 获取密码：优先使用传入值，否则生成随机密码
    let password = password.filter(|p| !p.is_empty()).unwrap_or_else(|| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return None;
        }
    };

    let admin = CreateTeacher {
        id: ADMIN_TEACHER_ID.to_string(),
        name: "Administrator".to_string(),
        email,
        password_hash,
        department_id: None,
    };

    match storage.create_teacher(admin).await {
        Ok(teacher) => {
            info!(
                "Admin account created successfully (ID: {}, email: {:?})",
                teacher.id, teacher.email
            );
            Some(teacher)
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
            None
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();
    if config.is_production() && config.jwt.secret == crate::config::DEFAULT_JWT_SECRET {
        warn!("JWT_SECRET is not set, tokens are signed with the development secret");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化管理员账号（如果需要）
    seed_admin(
        storage.as_ref(),
        &config.auth,
        std::env::var("ADMIN_PASSWORD").ok(),
    )
    .await;

    StartupContext { storage }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_shape() {
        let password = generate_random_password(16);
        assert_eq!(password.chars().count(), 16);
        assert_ne!(password, generate_random_password(16));
    }
}
