//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户实体与值对象
//! - 创建 / 部分更新 / ID 的输入校验

mod entity;
mod errors;
mod validation;
mod value_objects;

pub use entity::{NewUser, User, UserPatch};
pub use errors::ValidationError;
pub use validation::{validate_create, validate_id, validate_update};
pub use value_objects::{Efficiency, FullName, Role, UserId, MAX_TEXT_LEN};
