#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use notes_api::{AppState, app::router::build_router, storage::Storage};
use serde_json::{Value, json};
use time::Duration;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret";

pub struct TestApp {
    app: Router,
}

pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub token: String,
}

impl TestApp {
    /// Authenticated mode over a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_storage(Storage::in_memory(), true)
    }

    /// Open mode: no auth routes, every note global.
    pub fn open() -> Self {
        Self::with_storage(Storage::in_memory(), false)
    }

    pub fn with_storage(storage: Storage, require_auth: bool) -> Self {
        let state = AppState::new(
            storage,
            TEST_JWT_SECRET,
            Duration::minutes(30),
            require_auth,
        );

        Self {
            app: build_router(state),
        }
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body), bearer)
            .await
    }

    pub async fn put_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        self.request_json(Method::PUT, path, Some(body), bearer)
            .await
    }

    pub async fn get_json(&self, path: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None, bearer).await
    }

    pub async fn delete_json(&self, path: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.request_json(Method::DELETE, path, None, bearer).await
    }

    pub async fn get_text(&self, path: &str, bearer: Option<&str>) -> (StatusCode, String) {
        let (status, bytes) = self.request(Method::GET, path, None, bearer).await;
        let text = String::from_utf8(bytes).expect("response is not valid utf-8 text");
        (status, text)
    }

    /// Sends an arbitrary `Authorization` header value.
    pub async fn get_with_authorization(&self, path: &str, authorization: &str) -> StatusCode {
        let req = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())
            .expect("failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");
        response.status()
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.request(method, path, body, bearer).await;

        if bytes.is_empty() {
            return (status, Value::Null);
        }

        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut req_builder = Request::builder().method(method).uri(path);

        if let Some(token) = bearer {
            req_builder = req_builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(body) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&body).expect("failed to serialize request body"))
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        (status, bytes.to_vec())
    }

    pub async fn signup_and_login(&self) -> TestUser {
        let username = format!("user-{}", Uuid::new_v4());
        let password = "strong-password-123";

        let (signup_status, signup_json) = self
            .post_json(
                "/signup",
                json!({
                    "username": username,
                    "password": password
                }),
                None,
            )
            .await;
        assert_eq!(signup_status, StatusCode::CREATED);

        let user_id = signup_json
            .pointer("/user/id")
            .and_then(Value::as_str)
            .expect("signup response misses user id");
        let user_id = Uuid::parse_str(user_id).expect("invalid user id from signup response");

        let (login_status, login_json) = self
            .post_json(
                "/login",
                json!({
                    "username": username,
                    "password": password
                }),
                None,
            )
            .await;
        assert_eq!(login_status, StatusCode::OK);

        let token = login_json
            .get("token")
            .and_then(Value::as_str)
            .expect("login response misses token")
            .to_string();

        TestUser {
            id: user_id,
            username,
            token,
        }
    }

    pub async fn create_note(&self, title: &str, description: &str, bearer: Option<&str>) -> String {
        let (status, json) = self
            .post_json(
                "/notes",
                json!({
                    "title": title,
                    "description": description
                }),
                bearer,
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        json.pointer("/note/id")
            .and_then(Value::as_str)
            .expect("create response misses note id")
            .to_string()
    }
}
