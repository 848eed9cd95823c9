use anyhow::Result;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use data_callback_server::{create_router, AppState, Config};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const CALLBACK_URI: &str = "/api/data-callback";

pub fn test_app() -> Router {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> Router {
    let state = AppState::new(config).expect("test config is valid");
    create_router(Arc::new(state))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Result<TestResponse> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await?.to_bytes();
    Ok(TestResponse {
        status,
        headers,
        body,
    })
}

pub async fn post_raw(app: &Router, body: impl Into<Body>) -> Result<TestResponse> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(CALLBACK_URI)
        .header("content-type", "application/json")
        .body(body.into())?;
    send(app, request).await
}

pub async fn post_callback(app: &Router, body: &Value) -> Result<TestResponse> {
    post_raw(app, serde_json::to_vec(body)?).await
}

/// A callback POST as the wallet host sends it.
pub fn callback_body(requested_info: Value) -> Value {
    json!({
        "calls": [
            {"to": "0x036CbD53842c5426634e7929541eC2318f3dCF7e", "data": "0xa9059cbb"}
        ],
        "chainId": "0x14a34",
        "version": "1.0",
        "capabilities": {
            "dataCallback": {
                "requests": [
                    {"type": "email", "optional": false},
                    {"type": "physicalAddress", "optional": true}
                ],
                "callbackURL": "http://localhost:3040/api/data-callback",
                "requestedInfo": requested_info
            }
        }
    })
}
