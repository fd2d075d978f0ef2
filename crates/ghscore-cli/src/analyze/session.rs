//! The ordered analysis flow: validate input, fetch the profile, pace two
//! simulated scan steps, fetch the report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ghscore_client::{BackendClient, ClientError, Report};
use thiserror::Error;

use super::progress::{ProgressTracker, UiPhase};
use crate::export;
use crate::render::AnalysisView;

/// Shown when an error carries no message of its own.
const FALLBACK_ERROR: &str = "failed to analyze candidate; check the username and try again";

#[derive(Debug, Error)]
pub(crate) enum AnalysisError {
    /// Empty or whitespace-only input. Never reaches the network.
    #[error("a username is required")]
    EmptyUsername,

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// One analysis session: owns the current report and drives the step
/// sequence.
///
/// `run` takes `&mut self`, so a second run cannot start while one is in
/// flight, and each run begins by discarding the previous report — a failed
/// run never leaves stale results behind.
pub(crate) struct AnalysisSession<'a> {
    client: &'a BackendClient,
    scan_step_delay: Duration,
    report: Option<Report>,
    username: Option<String>,
    progress: ProgressTracker,
    phase: UiPhase,
}

impl<'a> AnalysisSession<'a> {
    pub(crate) fn new(client: &'a BackendClient, scan_step_delay_ms: u64) -> Self {
        Self {
            client,
            scan_step_delay: Duration::from_millis(scan_step_delay_ms),
            report: None,
            username: None,
            progress: ProgressTracker::default(),
            phase: UiPhase::Idle,
        }
    }

    pub(crate) fn current_report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> UiPhase {
        self.phase
    }

    /// Runs the full analysis for `username`, reporting progress through
    /// `view`. Returns `true` when the run ends with results, `false` when
    /// it ends in the error phase.
    pub(crate) async fn run(&mut self, username: &str, view: &mut dyn AnalysisView) -> bool {
        match self.try_run(username, view).await {
            Ok(()) => {
                self.set_phase(UiPhase::Results, view);
                true
            }
            Err(err) => {
                self.report = None;
                let message = err.to_string();
                let message = if message.is_empty() {
                    FALLBACK_ERROR
                } else {
                    message.as_str()
                };
                self.set_phase(UiPhase::Error, view);
                view.error(message);
                false
            }
        }
    }

    async fn try_run(
        &mut self,
        username: &str,
        view: &mut dyn AnalysisView,
    ) -> Result<(), AnalysisError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AnalysisError::EmptyUsername);
        }
        tracing::debug!(username, "analysis run started");

        self.report = None;
        self.username = Some(username.to_owned());
        self.progress.reset();
        self.set_phase(UiPhase::Loading, view);
        view.progress(self.progress.completed());

        let mut profile = self.client.fetch_profile(username).await?;
        if profile.avatar_url.is_none() {
            profile.avatar_url = Some(github_avatar_url(username));
        }
        view.profile(&profile);
        view.progress(self.progress.advance());

        // The two scan steps are pure pacing while the backend works; they
        // track no real signal and always succeed.
        view.progress(self.progress.advance());
        tokio::time::sleep(self.scan_step_delay).await;
        view.progress(self.progress.advance());
        tokio::time::sleep(self.scan_step_delay).await;

        let report = self.client.fetch_report(username).await?;
        view.progress(self.progress.advance());
        view.report(&report);
        self.report = Some(report);

        Ok(())
    }

    fn set_phase(&mut self, phase: UiPhase, view: &mut dyn AnalysisView) {
        self.phase = phase;
        view.phase(phase);
    }

    /// Writes the current report as a text file into `dir`.
    ///
    /// Quietly does nothing when no report is held — nothing has been
    /// analyzed yet, or the last run failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub(crate) fn export_current(&self, dir: &Path) -> anyhow::Result<Option<PathBuf>> {
        let (Some(report), Some(username)) = (self.report.as_ref(), self.username.as_deref())
        else {
            return Ok(None);
        };
        Ok(Some(export::write_report(report, username, dir)?))
    }
}

/// GitHub serves every user's avatar at a well-known URL.
fn github_avatar_url(username: &str) -> String {
    format!("https://github.com/{username}.png")
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
