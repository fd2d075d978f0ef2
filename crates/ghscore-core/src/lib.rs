//! Shared configuration for the ghscore workspace.
//!
//! All runtime knobs come from `GHSCORE_`-prefixed environment variables,
//! each with a default that reproduces the stock local setup (backend at
//! `http://localhost:5000/api`, one-second scan pacing).

mod app_config;
mod config;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
