//! 配置管理
//!
//! 配置按以下顺序叠加：内置默认值 → `config.toml` → `config.{APP_ENV}.toml`
//! → `COURSELOAD__*` 环境变量 → 常用环境变量覆盖（`JWT_SECRET`、`DATABASE_URL` 等）。

#[path = "impl.rs"]
mod config_impl;
mod structs;

pub use config_impl::DEFAULT_JWT_SECRET;
pub use structs::*;
