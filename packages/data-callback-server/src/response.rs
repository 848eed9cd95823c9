//! Response types for the callback server API.

use serde::Serialize;

/// `GET /api/data-callback` payload.
#[derive(Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub status: &'static str,
}

/// Response from the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub callback_url: String,
    pub rule_set: &'static str,
    pub uptime_secs: u64,
}
