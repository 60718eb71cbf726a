//! User Context - Errors

use thiserror::Error;

/// 输入校验错误
///
/// `Display` 的内容直接作为响应中的 `error` 字段返回给调用方
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 创建请求的全部错误，按字段顺序收集
    #[error("{}", .0.join(", "))]
    Invalid(Vec<String>),

    #[error("Invalid value for {0}")]
    InvalidText(&'static str),

    #[error("Invalid efficiency value")]
    InvalidEfficiency,

    #[error("No update fields provided")]
    NoFields,

    #[error("Invalid user ID")]
    InvalidId,
}
