//! User Commands

use crate::domain::user::{NewUser, UserId, UserPatch};

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub user: NewUser,
}

/// 部分更新用户命令
///
/// `user_id` 为 None 表示路径 ID 是数字但不可能对应任何行
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: Option<UserId>,
    pub patch: UserPatch,
}

/// 删除单个用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: Option<UserId>,
}

/// 删除所有用户命令
#[derive(Debug, Clone)]
pub struct DeleteAllUsers;
