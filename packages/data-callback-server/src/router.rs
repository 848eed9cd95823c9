//! HTTP router setup.

use crate::handlers;
use crate::middleware::inject_request_id;
use crate::state::AppState;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::Router;
use data_callback_types::CALLBACK_PATH;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// CORS is wide open: callers are external wallet hosts, not our own origin.
/// The CORS layer answers `OPTIONS` preflights itself.
pub fn create(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            CALLBACK_PATH,
            get(handlers::liveness).post(handlers::data_callback),
        )
        .layer(axum::middleware::from_fn(inject_request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
