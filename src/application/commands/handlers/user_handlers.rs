//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteAllUsers, DeleteUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::UserRepositoryPort;
use crate::domain::user::{User, UserId};

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<UserId, ApplicationError> {
        let user_id = self.user_repo.insert(&command.user).await?;

        tracing::info!(
            user_id = %user_id,
            role = %command.user.role(),
            "User created"
        );

        Ok(user_id)
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 更新并返回更新后的行；更新后查不到该行时返回 NotFound
    pub async fn handle(&self, command: UpdateUser) -> Result<User, ApplicationError> {
        let Some(user_id) = command.user_id else {
            return Err(ApplicationError::not_found("User", "<non-integer id>"));
        };

        let user = self
            .user_repo
            .update(user_id, &command.patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", user_id))?;

        tracing::info!(user_id = %user_id, "User updated");

        Ok(user)
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 删除并返回删除前的内容
    pub async fn handle(&self, command: DeleteUser) -> Result<User, ApplicationError> {
        let Some(user_id) = command.user_id else {
            return Err(ApplicationError::not_found("User", "<non-integer id>"));
        };

        let user = self
            .user_repo
            .delete(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", user_id))?;

        tracing::info!(
            user_id = %user_id,
            full_name = %user.full_name,
            "User deleted"
        );

        Ok(user)
    }
}

// ============================================================================
// DeleteAllUsers
// ============================================================================

/// DeleteAllUsers Handler
pub struct DeleteAllUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteAllUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _command: DeleteAllUsers) -> Result<u64, ApplicationError> {
        let deleted = self.user_repo.delete_all().await?;

        tracing::info!(deleted, "All users deleted");

        Ok(deleted)
    }
}
