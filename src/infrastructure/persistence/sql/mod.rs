//! SQL Persistence - 关系型数据库持久化实现

mod connector;
mod user_repo;

pub use connector::*;
pub use user_repo::*;
