use std::path::PathBuf;

/// Runtime configuration for the ghscore client and CLI.
///
/// Built by [`crate::load_app_config`] from `GHSCORE_`-prefixed environment
/// variables; every field has a default, so an empty environment yields a
/// working configuration pointed at a local backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the analyzer backend, e.g. `http://localhost:5000/api`.
    pub backend_base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every backend request.
    pub user_agent: String,
    /// Additional attempts after the first failure for transient errors.
    pub max_retries: u32,
    /// Base delay in milliseconds for exponential retry back-off.
    pub retry_backoff_base_ms: u64,
    /// Pause between the two simulated scan steps. Pure UI pacing — not a
    /// timeout and not tied to any backend signal.
    pub scan_step_delay_ms: u64,
    /// Directory that exported report files are written into.
    pub export_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}
