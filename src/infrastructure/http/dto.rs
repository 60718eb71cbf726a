//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::user::{User, UserId};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式: `{ "success": bool, "result": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
        }
    }
}

impl ApiResponse<()> {
    /// 成功但不带 result 字段
    pub fn ok() -> Self {
        Self {
            success: true,
            result: None,
        }
    }
}

/// 错误载荷
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiResponse<ErrorBody> {
    /// 失败响应
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: Some(ErrorBody {
                error: error.into(),
            }),
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub full_name: String,
    pub role: String,
    pub efficiency: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            role: user.role,
            efficiency: user.efficiency,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: UserId,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub role: Option<String>,
}
