//! # Data Callback Server
//!
//! Validation endpoint for the wallet `dataCallback` capability. The wallet
//! host POSTs the personal data a user approved; the server either rejects
//! individual fields or echoes the original calls so the wallet can finalize.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin data-callback-server
//! ```
//!
//! ## Endpoints
//! - `POST /api/data-callback` - Validate callback data (always HTTP 200)
//! - `GET /api/data-callback` - Liveness payload
//! - `OPTIONS /api/data-callback` - CORS preflight (any origin)
//! - `GET /health` - Service health

pub mod config;
mod error;
mod handlers;
pub mod middleware;
mod response;
mod router;
mod state;

pub use config::Config;
pub use error::Error;
pub use router::create as create_router;
pub use state::AppState;
