//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::application::queries::{GetUser, ListUsers};
use crate::domain::user::User;

/// GetUser Handler
///
/// 与更新/删除不同，找不到时返回空列表而不是 NotFound
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<Vec<User>, ApplicationError> {
        let Some(user_id) = query.user_id else {
            return Ok(Vec::new());
        };

        let user = self.user_repo.find_by_id(user_id).await?;
        Ok(user.into_iter().collect())
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        // 空字符串等同于不过滤
        let role = query.role.as_deref().filter(|r| !r.is_empty());
        let users = self.user_repo.find_all(role).await?;
        Ok(users)
    }
}
