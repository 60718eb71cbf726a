//! User Context - Value Objects

use serde::{Deserialize, Serialize};

/// 文本字段（full_name / role）去除首尾空白后的最大字符数
pub const MAX_TEXT_LEN: usize = 255;

/// 用户唯一标识，由存储层自增分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn trimmed_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_TEXT_LEN {
        return None;
    }
    Some(trimmed.to_string())
}

/// 用户全名
///
/// 不变量: 去除首尾空白后非空，且不超过 255 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(name: &str) -> Result<Self, &'static str> {
        trimmed_text(name).map(Self).ok_or("full_name must be 1-255 characters")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 用户角色，约束同 [`FullName`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    pub fn new(role: &str) -> Result<Self, &'static str> {
        trimmed_text(role).map(Self).ok_or("role must be 1-255 characters")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 效率值，非负整数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Efficiency(i64);

impl Efficiency {
    pub fn new(value: i64) -> Result<Self, &'static str> {
        if value < 0 {
            return Err("efficiency must be >= 0");
        }
        Ok(Self(value))
    }

    /// 从 JSON 数值解析
    ///
    /// 接受整数，以及小数部分为 0 的浮点数（`5.0`）；字符串、负数、非整数均拒绝
    pub fn from_json(value: &serde_json::Value) -> Result<Self, &'static str> {
        if let Some(n) = value.as_i64() {
            return Self::new(n);
        }
        if let Some(n) = value.as_u64() {
            return i64::try_from(n)
                .map_err(|_| "efficiency is out of range")
                .and_then(Self::new);
        }
        match value.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 && f < i64::MAX as f64 => Ok(Self(f as i64)),
            Some(_) => Err("efficiency must be a non-negative integer"),
            None => Err("efficiency must be a number"),
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
