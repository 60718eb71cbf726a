//! User Queries

use crate::domain::user::UserId;

/// 按 ID 查询用户
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: Option<UserId>,
}

/// 列出用户，可按角色精确过滤
#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pub role: Option<String>,
}
