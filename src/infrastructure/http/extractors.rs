//! Custom Axum extractors

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::{request::Parts, StatusCode};
use serde_json::{Map, Value};

use super::dto::ListUsersParams;
use super::error::ApiError;
use crate::domain::user::{validate_id, UserId, ValidationError};

/// 请求体中的原始 JSON 对象
///
/// - 空请求体视为 `{}`
/// - 非法 JSON 返回 400
/// - 合法但不是对象的 JSON（数组、字符串等）视为 `{}`
pub struct JsonFields(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| match e.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(e.body_text()),
                _ => ApiError::BadRequest(e.body_text()),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Map::new()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

        match value {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Ok(Self(Map::new())),
        }
    }
}

/// 路径中的用户 ID，提取时完成数字校验
///
/// 内部为 None 表示是数字但不可能对应任何行
pub struct UserIdParam(pub Option<UserId>);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::from(ValidationError::InvalidId))?;

        let id = validate_id(&raw)?;
        Ok(Self(id))
    }
}

/// `GET /get` 的查询参数，解析失败时仍返回统一的错误信封
pub struct ListQuery(pub ListUsersParams);

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListUsersParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Ok(Self(params))
    }
}
