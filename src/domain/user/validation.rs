//! User Context - Input Validation
//!
//! 纯函数，直接作用于请求中的原始 JSON 对象，
//! 这样类型不对的字段（如 `"efficiency": "5"`）也会成为校验错误而不是反序列化失败

use serde_json::{Map, Value};

use super::{Efficiency, FullName, NewUser, Role, UserId, UserPatch, ValidationError};

/// 校验创建请求
///
/// 三个字段都是必填，错误按 `full_name`、`role`、`efficiency` 的顺序全部收集
pub fn validate_create(fields: &Map<String, Value>) -> Result<NewUser, ValidationError> {
    let full_name = text_field(fields, "full_name", FullName::new);
    let role = text_field(fields, "role", Role::new);
    let efficiency = fields
        .get("efficiency")
        .and_then(|v| Efficiency::from_json(v).ok());

    match (full_name, role, efficiency) {
        (Some(full_name), Some(role), Some(efficiency)) => {
            Ok(NewUser::new(full_name, role, efficiency))
        }
        (full_name, role, efficiency) => {
            let mut errors = Vec::new();
            if full_name.is_none() {
                errors.push("Invalid or missing full_name".to_string());
            }
            if role.is_none() {
                errors.push("Invalid or missing role".to_string());
            }
            if efficiency.is_none() {
                errors.push("Invalid or missing efficiency".to_string());
            }
            Err(ValidationError::Invalid(errors))
        }
    }
}

/// 校验部分更新请求
///
/// 只校验请求中出现的字段（`null` 也算出现），遇到第一个非法字段立即返回。
/// 请求中没有任何可更新字段时返回 [`ValidationError::NoFields`]
pub fn validate_update(fields: &Map<String, Value>) -> Result<UserPatch, ValidationError> {
    if fields.is_empty() {
        return Err(ValidationError::NoFields);
    }

    let mut patch = UserPatch::default();

    if let Some(value) = fields.get("full_name") {
        let full_name = value
            .as_str()
            .and_then(|s| FullName::new(s).ok())
            .ok_or(ValidationError::InvalidText("full_name"))?;
        patch.full_name = Some(full_name);
    }

    if let Some(value) = fields.get("role") {
        let role = value
            .as_str()
            .and_then(|s| Role::new(s).ok())
            .ok_or(ValidationError::InvalidText("role"))?;
        patch.role = Some(role);
    }

    if let Some(value) = fields.get("efficiency") {
        let efficiency =
            Efficiency::from_json(value).map_err(|_| ValidationError::InvalidEfficiency)?;
        patch.efficiency = Some(efficiency);
    }

    // 只有未知字段时没有可写的列
    if patch.is_empty() {
        return Err(ValidationError::NoFields);
    }

    Ok(patch)
}

/// 校验路径中的用户 ID
///
/// 数字的写法与 JSON 客户端常见的宽松规则一致：十进制（可带符号、小数、指数）、
/// 无符号的 `0x`/`0o`/`0b` 整数，以及区分大小写的 `Infinity`。
/// `inf`、`nan` 之类的文本不算数字。
///
/// 返回 `Ok(None)` 表示是数字但不可能对应任何行
/// （如 `1.5`、`Infinity` 或超出范围的值），调用方按"未找到"处理
pub fn validate_id(raw: &str) -> Result<Option<UserId>, ValidationError> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(Some(UserId::new(id)));
    }

    if let Some(parsed) = prefixed_integer(raw) {
        return parsed;
    }

    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned == "Infinity" {
        return Ok(None);
    }
    // 十进制写法里唯一允许的字母是指数标记
    if unsigned
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return Err(ValidationError::InvalidId);
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 => {
            Ok(Some(UserId::new(n as i64)))
        }
        Ok(_) => Ok(None),
        Err(_) => Err(ValidationError::InvalidId),
    }
}

/// `0x1F`、`0o17`、`0b101` 形式的整数；不是这种前缀时返回 None
fn prefixed_integer(raw: &str) -> Option<Result<Option<UserId>, ValidationError>> {
    let radix = match raw.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &raw[2..];

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(Err(ValidationError::InvalidId));
    }

    // 超出 i64 的值仍是数字，只是不可能对应任何行
    Some(Ok(i64::from_str_radix(digits, radix).ok().map(UserId::new)))
}

fn text_field<T>(
    fields: &Map<String, Value>,
    name: &str,
    parse: fn(&str) -> Result<T, &'static str>,
) -> Option<T> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| parse(s).ok())
}
