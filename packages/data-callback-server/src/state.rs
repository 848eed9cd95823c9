//! Application state shared across handlers.

use crate::config::Config;
use data_callback_types::{default_callback_url, RuleSet};
use std::time::Instant;
use tracing::info;

/// Shared application state. Immutable after startup.
pub struct AppState {
    pub config: Config,
    pub rule_set: RuleSet,
    /// URL the request builder hands to the wallet as `callbackURL`.
    pub callback_url: String,
    pub start_time: Instant,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: Config) -> Result<Self, crate::Error> {
        config.validate()?;
        let callback_url = default_callback_url(&config.public_origin)
            .map_err(|e| crate::Error::Config(e.to_string()))?;

        info!(callback_url = %callback_url, rule_set = ?config.rule_set, "Callback endpoint configured");

        Ok(Self {
            rule_set: config.rule_set,
            callback_url,
            config,
            start_time: Instant::now(),
        })
    }
}
