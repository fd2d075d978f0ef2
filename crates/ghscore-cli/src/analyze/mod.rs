//! The `analyze` command: flow controller and progress bookkeeping.

mod progress;
mod session;

pub(crate) use progress::UiPhase;

use std::path::PathBuf;

use ghscore_client::BackendClient;
use ghscore_core::AppConfig;

use crate::render::ConsoleView;
use session::AnalysisSession;

/// Run one full analysis from the command line, optionally exporting the
/// report text afterwards.
///
/// # Errors
///
/// Returns an error when the analysis ends in the error phase (so the
/// process exits non-zero) or when the export file cannot be written.
pub(crate) async fn run_analyze(
    client: &BackendClient,
    config: &AppConfig,
    username: &str,
    export: bool,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut session = AnalysisSession::new(client, config.scan_step_delay_ms);
    let mut view = ConsoleView;

    if !session.run(username, &mut view).await {
        anyhow::bail!("analysis did not complete");
    }

    if export {
        let dir = output_dir.unwrap_or_else(|| config.export_dir.clone());
        if let Some(path) = session.export_current(&dir)? {
            println!("report exported to {}", path.display());
        }
    }

    Ok(())
}
