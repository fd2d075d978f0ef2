use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a `GHSCORE_*` variable is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a `GHSCORE_*` variable is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let backend_base_url = or_default("GHSCORE_BACKEND_URL", "http://localhost:5000/api");
    let request_timeout_secs = parse_u64("GHSCORE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GHSCORE_USER_AGENT", "ghscore/0.1 (candidate-screening)");
    let max_retries = parse_u32("GHSCORE_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("GHSCORE_RETRY_BACKOFF_BASE_MS", "500")?;
    let scan_step_delay_ms = parse_u64("GHSCORE_SCAN_STEP_DELAY_MS", "1000")?;
    let export_dir = PathBuf::from(or_default("GHSCORE_EXPORT_DIR", "."));
    let log_level = or_default("GHSCORE_LOG_LEVEL", "info");

    Ok(AppConfig {
        backend_base_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        scan_step_delay_ms,
        export_dir,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
