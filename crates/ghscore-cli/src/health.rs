//! The `health` command: backend liveness check.

use ghscore_client::BackendClient;

/// Calls the backend health endpoint and prints its status.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or answers with an
/// unexpected payload.
pub(crate) async fn run_health(client: &BackendClient) -> anyhow::Result<()> {
    let health = client.health().await?;
    if health.service.is_empty() {
        println!("{}", health.status);
    } else {
        println!("{}: {}", health.service, health.status);
    }
    Ok(())
}
