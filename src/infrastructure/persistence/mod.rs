//! Persistence Layer - 数据持久化
//!
//! SQL 存储实现

pub mod sql;

pub use self::sql::{SqlConnector, SqlUserRepository};
