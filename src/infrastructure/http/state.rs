//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态，创建后只读

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateUserHandler, DeleteAllUsersHandler, DeleteUserHandler, UpdateUserHandler,
    // Query handlers
    GetUserHandler, ListUsersHandler,
    // Ports
    UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,
    pub update_user_handler: UpdateUserHandler,
    pub delete_user_handler: DeleteUserHandler,
    pub delete_all_users_handler: DeleteAllUsersHandler,

    // ========== Query Handlers ==========
    pub get_user_handler: GetUserHandler,
    pub list_users_handler: ListUsersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self {
            // Command handlers
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            update_user_handler: UpdateUserHandler::new(user_repo.clone()),
            delete_user_handler: DeleteUserHandler::new(user_repo.clone()),
            delete_all_users_handler: DeleteAllUsersHandler::new(user_repo.clone()),

            // Query handlers
            get_user_handler: GetUserHandler::new(user_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo),
        }
    }
}
