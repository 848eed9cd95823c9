//! Callback server configuration.

use data_callback_types::RuleSet;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use crate::Error;

/// Configuration file name (without extension) looked up in the working directory.
pub const CONFIG_FILE: &str = "data-callback";
/// Prefix for environment overrides, e.g. `CALLBACK_BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "CALLBACK";

/// Configuration for the callback server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Origin the wallet host reaches us on; the callback URL is derived from it.
    #[serde(default = "defaults::public_origin")]
    pub public_origin: String,

    #[serde(default)]
    pub rule_set: RuleSet,

    #[serde(default = "defaults::max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            public_origin: defaults::public_origin(),
            rule_set: RuleSet::default(),
            max_body_bytes: defaults::max_body_bytes(),
            request_timeout_secs: defaults::request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load `data-callback.toml` (optional) overlaid by `CALLBACK_*` env vars.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(file: &str) -> Result<Self, Error> {
        if !config_file_present(file) {
            warn!(file, "No config file found, using defaults and environment");
        }
        let config: Config = ::config::Config::builder()
            .add_source(
                ::config::File::with_name(file)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_body_bytes == 0 {
            return Err(Error::Config("max_body_bytes must be greater than 0".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }
        data_callback_types::default_callback_url(&self.public_origin)
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(())
    }
}

/// Whether `file` or `file.toml` exists, mirroring how the loader resolves it.
pub fn config_file_present(file: &str) -> bool {
    Path::new(file).is_file() || Path::new(&format!("{file}.toml")).is_file()
}

mod defaults {
    pub fn bind_address() -> String {
        "0.0.0.0:3040".into()
    }

    pub fn public_origin() -> String {
        "http://localhost:3040".into()
    }

    pub fn max_body_bytes() -> usize {
        64 * 1024
    }

    pub fn request_timeout_secs() -> u64 {
        10
    }
}
