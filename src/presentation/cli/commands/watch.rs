use std::time::Duration;

use super::check::run_check;
use crate::application::services::orchestrator::RunOrchestrator;
use crate::domain::ports::config_source::ConfigSource;

/// Repeat the check at a fixed interval until Ctrl+C.
///
/// The first check runs immediately. Ticks missed while a slow check is in
/// progress are skipped rather than queued. Errors of a single check are
/// logged and the loop keeps going.
///
/// # Errors
///
/// Currently never fails; the signature leaves room for setup errors.
pub async fn run_watch(
    orchestrator: &RunOrchestrator<'_>,
    source: &dyn ConfigSource,
    interval_secs: u64,
    force_notify: bool,
    json: bool,
) -> anyhow::Result<()> {
    let interval_secs = interval_secs.max(1);
    tracing::info!("Watching sites (interval: {interval_secs}s)");
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match run_check(orchestrator, source, force_notify, json).await {
                    Ok(all_up) => {
                        tracing::info!(
                            "Check finished: {}",
                            if all_up { "all sites up" } else { "not all sites up" }
                        );
                    }
                    Err(e) => {
                        tracing::error!("Check cycle failed: {e}");
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping");
                break;
            }
        }
    }
    Ok(())
}
