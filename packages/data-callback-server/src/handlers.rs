//! HTTP request handlers.

use crate::middleware::RequestId;
use crate::response::{HealthResponse, LivenessResponse};
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use data_callback_types::{try_handle_callback, CallbackResponse, SERVER_ERROR_MESSAGE};
use std::sync::Arc;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Service health. Static apart from uptime.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        callback_url: state.callback_url.clone(),
        rule_set: state.rule_set.as_str(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// `GET /api/data-callback`: liveness payload for wallet integrators.
pub async fn liveness() -> impl IntoResponse {
    let now = OffsetDateTime::now_utc();
    let timestamp = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string());

    Json(LivenessResponse {
        message: "Data callback endpoint is live",
        timestamp,
        status: "ok",
    })
}

/// `POST /api/data-callback`: validate the data the wallet collected.
///
/// Always answers 200. Rejections, structural problems and unreadable bodies
/// are all reported through the `errors` object so the wallet can re-prompt.
pub async fn data_callback(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let req_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_default();

    let body = match axum::body::to_bytes(request.into_body(), state.config.max_body_bytes).await
    {
        Ok(body) => body,
        Err(e) => {
            warn!(req_id = %req_id, error = %e, "Failed to read callback body");
            return callback_reply(CallbackResponse::server_error(SERVER_ERROR_MESSAGE));
        }
    };

    let response = match try_handle_callback(&body, state.rule_set) {
        Ok(response) => response,
        Err(e) => {
            // Category and position only: the message may quote user data.
            warn!(
                req_id = %req_id,
                category = ?e.classify(),
                line = e.line(),
                column = e.column(),
                "Unparseable callback body"
            );
            CallbackResponse::server_error(SERVER_ERROR_MESSAGE)
        }
    };

    match response.errors() {
        None => info!(req_id = %req_id, bytes = body.len(), "Callback accepted"),
        Some(errors) => warn!(
            req_id = %req_id,
            rejected = ?errors.keys().collect::<Vec<_>>(),
            "Callback rejected"
        ),
    }

    callback_reply(response)
}

fn callback_reply(response: CallbackResponse) -> Response {
    (StatusCode::OK, Json(response)).into_response()
}
