use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ghscore_client::BackendClient;
use ghscore_core::AppConfig;

mod analyze;
mod export;
mod health;
mod render;

#[derive(Debug, Parser)]
#[command(name = "ghscore-cli")]
#[command(about = "GitHub candidate scorer command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a GitHub user and render the hiring report.
    Analyze {
        /// GitHub username to analyze.
        username: String,
        /// Also write the report as a plain-text file.
        #[arg(long)]
        export: bool,
        /// Directory for the exported file (defaults to `GHSCORE_EXPORT_DIR`).
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Check that the analyzer backend is reachable.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ghscore_core::load_app_config_from_env()?;
    init_tracing(&config);

    let cli = Cli::parse();
    let client = build_backend_client(&config)?;
    match cli.command {
        Commands::Analyze {
            username,
            export,
            output_dir,
        } => analyze::run_analyze(&client, &config, &username, export, output_dir).await,
        Commands::Health => health::run_health(&client).await,
    }
}

fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_backend_client(config: &AppConfig) -> anyhow::Result<BackendClient> {
    Ok(BackendClient::new(
        &config.backend_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_ms,
    )?)
}
