//! Liveness, health, CORS and request correlation.

use anyhow::Result;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;

use crate::utils::{send, test_app, CALLBACK_URI};

#[tokio::test]
async fn test_liveness_payload() -> Result<()> {
    let app = test_app();
    let request = Request::builder().uri(CALLBACK_URI).body(Body::empty())?;
    let response = send(&app, request).await?;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json()?;
    assert_eq!(body["message"], json!("Data callback endpoint is live"));
    assert_eq!(body["status"], json!("ok"));
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.contains('T') && timestamp.ends_with('Z'), "{timestamp}");
    Ok(())
}

#[tokio::test]
async fn test_health_reports_callback_url() -> Result<()> {
    let app = test_app();
    let request = Request::builder().uri("/health").body(Body::empty())?;
    let body = send(&app, request).await?.json()?;

    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["service"], json!("data-callback-server"));
    assert_eq!(
        body["callback_url"],
        json!("http://localhost:3040/api/data-callback")
    );
    assert_eq!(body["rule_set"], json!("extended"));
    Ok(())
}

#[tokio::test]
async fn test_preflight_allows_any_origin() -> Result<()> {
    let app = test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(CALLBACK_URI)
        .header("origin", "https://keys.coinbase.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())?;
    let response = send(&app, request).await?;

    assert!(response.status.is_success());
    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    let methods = response
        .headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()?;
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "{methods}");
    }
    Ok(())
}

#[tokio::test]
async fn test_cross_origin_post_gets_cors_header() -> Result<()> {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri(CALLBACK_URI)
        .header("origin", "https://keys.coinbase.com")
        .body(Body::from("{}"))?;
    let response = send(&app, request).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("access-control-allow-origin").unwrap(),
        "*"
    );
    Ok(())
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() -> Result<()> {
    let app = test_app();

    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = send(&app, request).await?;
    let generated = response.headers.get("x-request-id").unwrap().to_str()?;
    assert!(generated.starts_with("cb-"));
    assert_eq!(generated.len(), 3 + 16);

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "wallet-42")
        .body(Body::empty())?;
    let response = send(&app, request).await?;
    assert_eq!(response.headers.get("x-request-id").unwrap(), "wallet-42");
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_404() -> Result<()> {
    let app = test_app();
    let request = Request::builder().uri("/api/other").body(Body::empty())?;
    assert_eq!(send(&app, request).await?.status, StatusCode::NOT_FOUND);
    Ok(())
}
