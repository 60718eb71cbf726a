//! HTTP Routes
//!
//! API Endpoints:
//! - /              GET     健康检查（纯文本）
//! - /create        POST    创建用户
//! - /get           GET     列出用户（可选 ?role=）
//! - /get/:id       GET     按 ID 查询用户
//! - /update/:id    PATCH   部分更新用户
//! - /delete        DELETE  删除所有用户
//! - /delete/:id    DELETE  删除单个用户

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/create", post(handlers::create_user))
        .route("/get", get(handlers::list_users))
        .route("/get/:id", get(handlers::get_user))
        .route("/update/:id", patch(handlers::update_user))
        .route("/delete", delete(handlers::delete_all_users))
        .route("/delete/:id", delete(handlers::delete_user))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::handlers::GREETING;
    use crate::infrastructure::http::server::build_router;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::persistence::sql::test_support::TestDatabase;
    use crate::infrastructure::persistence::SqlUserRepository;

    struct TestApp {
        _db: TestDatabase,
        router: Router,
    }

    impl TestApp {
        async fn new() -> Self {
            Self::with_database(TestDatabase::new().await)
        }

        fn with_database(db: TestDatabase) -> Self {
            let repo = Arc::new(SqlUserRepository::new(db.connector()));
            let router = build_router(Arc::new(AppState::new(repo)));
            Self { _db: db, router }
        }

        async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => builder
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }

        async fn create(&self, full_name: &str, role: &str, efficiency: i64) -> i64 {
            let (status, body) = self
                .send(
                    "POST",
                    "/create",
                    Some(json!({
                        "full_name": full_name,
                        "role": role,
                        "efficiency": efficiency
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
            body["result"]["id"].as_i64().unwrap()
        }

        async fn users(&self, uri: &str) -> Vec<Value> {
            let (status, body) = self.send("GET", uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], json!(true));
            body["result"]["users"].as_array().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn test_root_returns_greeting() {
        let app = TestApp::new().await;
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], GREETING.as_bytes());
    }

    #[tokio::test]
    async fn test_create_then_get_returns_trimmed_row() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send(
                "POST",
                "/create",
                Some(json!({ "full_name": "  Alice ", "role": "Engineer ", "efficiency": 5 })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], json!(true));
        let id = body["result"]["id"].as_i64().unwrap();

        let users = app.users(&format!("/get/{}", id)).await;
        assert_eq!(
            users,
            vec![json!({ "id": id, "full_name": "Alice", "role": "Engineer", "efficiency": 5 })]
        );
    }

    #[tokio::test]
    async fn test_create_invalid_input_is_rejected_and_not_persisted() {
        let app = TestApp::new().await;
        let cases = [
            json!({ "role": "Engineer", "efficiency": 5 }),
            json!({ "full_name": "Alice", "efficiency": 5 }),
            json!({ "full_name": "Alice", "role": "Engineer" }),
            json!({ "full_name": "   ", "role": "Engineer", "efficiency": 5 }),
            json!({ "full_name": "Alice", "role": "x".repeat(256), "efficiency": 5 }),
            json!({ "full_name": "Alice", "role": "Engineer", "efficiency": -1 }),
            json!({ "full_name": "Alice", "role": "Engineer", "efficiency": 2.5 }),
            json!({ "full_name": "Alice", "role": "Engineer", "efficiency": "5" }),
        ];

        for case in cases {
            let (status, body) = app.send("POST", "/create", Some(case.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "case: {}", case);
            assert_eq!(body["success"], json!(false));
            assert!(body["result"]["error"].is_string());
        }

        assert!(app.users("/get").await.is_empty());
    }

    #[tokio::test]
    async fn test_create_joins_all_errors() {
        let app = TestApp::new().await;
        let (status, body) = app.send("POST", "/create", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "result": {
                    "error": "Invalid or missing full_name, Invalid or missing role, Invalid or missing efficiency"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = TestApp::new().await;
        let request = Request::builder()
            .method("POST")
            .uri("/create")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = TestApp::new().await;
        app.create("Alice", "Engineer", 5).await;

        for (method, uri, body) in [
            ("GET", "/get/abc", None),
            ("PATCH", "/update/abc", Some(json!({ "role": "Manager" }))),
            ("DELETE", "/delete/abc", None),
            ("GET", "/get/inf", None),
            ("GET", "/get/nan", None),
        ] {
            let (status, body) = app.send(method, uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["result"]["error"], json!("Invalid user ID"));
        }
    }

    #[tokio::test]
    async fn test_get_missing_id_returns_empty_list() {
        let app = TestApp::new().await;
        assert!(app.users("/get/42").await.is_empty());
        assert!(app.users("/get/1.5").await.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_by_role() {
        let app = TestApp::new().await;
        app.create("Alice", "Engineer", 5).await;
        app.create("Bob", "Manager", 3).await;

        assert_eq!(app.users("/get").await.len(), 2);

        let managers = app.users("/get?role=Manager").await;
        assert_eq!(managers.len(), 1);
        assert_eq!(managers[0]["full_name"], json!("Bob"));

        // 空过滤条件等同于不过滤
        assert_eq!(app.users("/get?role=").await.len(), 2);
    }

    #[tokio::test]
    async fn test_prefixed_numeric_id_finds_row() {
        let app = TestApp::new().await;
        let id = app.create("Alice", "Engineer", 5).await;

        let users = app.users(&format!("/get/0x{:x}", id)).await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["id"], json!(id));
        assert!(app.users("/get/Infinity").await.is_empty());
    }

    #[tokio::test]
    async fn test_bad_query_string_uses_error_envelope() {
        let app = TestApp::new().await;

        let (status, body) = app.send("GET", "/get?role=a&role=b", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert!(body["result"]["error"].is_string());
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let app = TestApp::new().await;
        let request = Request::builder()
            .method("POST")
            .uri("/create")
            .header("content-type", "application/json")
            .body(Body::from(vec![b' '; 1024 * 1024 + 1]))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert!(body["result"]["error"].is_string());
    }

    #[tokio::test]
    async fn test_update_nonexistent_id_is_not_found() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send("PATCH", "/update/999", Some(json!({ "role": "Manager" })))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["result"]["error"], json!("User not found"));
    }

    #[tokio::test]
    async fn test_update_empty_body_is_bad_request() {
        let app = TestApp::new().await;
        let id = app.create("Alice", "Engineer", 5).await;

        let (status, body) = app
            .send("PATCH", &format!("/update/{}", id), Some(json!({})))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["result"]["error"], json!("No update fields provided"));
    }

    #[tokio::test]
    async fn test_update_reports_first_invalid_field_only() {
        let app = TestApp::new().await;
        let id = app.create("Alice", "Engineer", 5).await;

        let (status, body) = app
            .send(
                "PATCH",
                &format!("/update/{}", id),
                Some(json!({ "efficiency": -4, "role": "" })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["result"]["error"], json!("Invalid value for role"));

        let users = app.users(&format!("/get/{}", id)).await;
        assert_eq!(users[0]["role"], json!("Engineer"));
        assert_eq!(users[0]["efficiency"], json!(5));
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let app = TestApp::new().await;
        let id = app.create("Alice", "Engineer", 5).await;
        let uri = format!("/update/{}", id);
        let patch = json!({ "role": "Manager", "efficiency": 7 });

        let (first_status, first) = app.send("PATCH", &uri, Some(patch.clone())).await;
        let (second_status, second) = app.send("PATCH", &uri, Some(patch)).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(
            second["result"],
            json!({ "id": id, "full_name": "Alice", "role": "Manager", "efficiency": 7 })
        );
    }

    #[tokio::test]
    async fn test_delete_one_returns_row_and_removes_it() {
        let app = TestApp::new().await;
        let id = app.create("Alice", "Engineer", 5).await;
        let uri = format!("/delete/{}", id);

        let (status, body) = app.send("DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "result": { "id": id, "full_name": "Alice", "role": "Engineer", "efficiency": 5 }
            })
        );

        assert!(app.users(&format!("/get/{}", id)).await.is_empty());

        let (status, body) = app.send("DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["result"]["error"], json!("User not found"));
    }

    #[tokio::test]
    async fn test_delete_all_then_list_is_empty() {
        let app = TestApp::new().await;
        app.create("Alice", "Engineer", 5).await;
        app.create("Bob", "Manager", 3).await;

        let (status, body) = app.send("DELETE", "/delete", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (_, body) = app.send("GET", "/get", None).await;
        assert_eq!(body, json!({ "success": true, "result": { "users": [] } }));
    }

    #[tokio::test]
    async fn test_storage_error_is_internal_error_with_message() {
        let app = TestApp::with_database(TestDatabase::without_schema());

        let (status, body) = app.send("GET", "/get", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
        let message = body["result"]["error"].as_str().unwrap();
        assert!(message.contains("users"), "unexpected message: {}", message);

        let (status, _) = app
            .send(
                "POST",
                "/create",
                Some(json!({ "full_name": "Alice", "role": "Engineer", "efficiency": 5 })),
            )
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
