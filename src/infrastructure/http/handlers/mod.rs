//! HTTP Handlers

mod root;
mod user;

pub use root::*;
pub use user::*;
