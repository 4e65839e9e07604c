//! Course Load - 院系课程工作量管理后端
//!
//! 基于 Actix Web 构建：教师、院系主任和管理员查看课程分配，
//! 院系主任和管理员提交“调整申请”，把课程的学生数或课时量拆分给多位教师。
//!
//! # 架构
//! - `allocation`: 工作量拆分逻辑（容量账本与分配编辑器）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `session`: 客户端会话上下文
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod allocation;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;
