//! users-service - 用户 CRUD HTTP 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户实体、值对象与输入校验
//!
//! 应用层 (application/):
//! - Ports: UserRepositoryPort
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 按 ID 查询 / 列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: 按请求打开连接的 SQL 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
