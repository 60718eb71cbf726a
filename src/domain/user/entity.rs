//! User Context - Entities

use super::{Efficiency, FullName, Role, UserId};

/// 已持久化的用户行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub role: String,
    pub efficiency: i64,
}

/// 待创建的用户，所有字段都已通过校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    full_name: FullName,
    role: Role,
    efficiency: Efficiency,
}

impl NewUser {
    pub fn new(full_name: FullName, role: Role, efficiency: Efficiency) -> Self {
        Self {
            full_name,
            role,
            efficiency,
        }
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn efficiency(&self) -> Efficiency {
        self.efficiency
    }
}

/// 部分更新：只有 `Some` 的字段会被写入
///
/// 不变量: 至少包含一个字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub full_name: Option<FullName>,
    pub role: Option<Role>,
    pub efficiency: Option<Efficiency>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.role.is_none() && self.efficiency.is_none()
    }
}
