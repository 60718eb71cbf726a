//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQL）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{NewUser, User, UserId, UserPatch};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 连接或语句执行失败，携带底层错误信息
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::DatabaseError(err.to_string())
    }
}

/// User Repository Port
///
/// 每个方法都是一次独立的存储访问；需要多条语句的操作（更新后回读、
/// 查找后删除）在同一个连接上按顺序执行
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入用户，返回存储分配的 ID
    async fn insert(&self, user: &NewUser) -> Result<UserId, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// 获取所有用户，`role` 不为 None 时只返回角色完全匹配的行
    async fn find_all(&self, role: Option<&str>) -> Result<Vec<User>, RepositoryError>;

    /// 更新补丁中出现的列，然后回读该行；行不存在时返回 None
    async fn update(
        &self,
        id: UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, RepositoryError>;

    /// 删除用户并返回删除前的内容；行不存在时返回 None
    async fn delete(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// 删除所有用户，返回删除的行数
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
