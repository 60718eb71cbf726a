//! Root Handler
//!
//! 健康检查，返回固定的问候文本

/// 根路径返回的文本
pub const GREETING: &str = "Users service is up! Use Postman or curl to call the API.";

/// `GET /`
pub async fn root() -> &'static str {
    GREETING
}
