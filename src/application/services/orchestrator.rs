use thiserror::Error;

use super::aggregator::RunAggregator;
use crate::domain::entities::run_config::RunConfig;
use crate::domain::entities::run_result::{NotificationStatus, RunResult};
use crate::domain::ports::config_source::ConfigSource;
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::prober::{ProbeError, Prober};
use crate::domain::ports::run_log::{LogError, RunLog};

pub const NO_CONFIG_MESSAGE: &str = "No config file";
pub const ALL_UP_MESSAGE: &str = "All sites up";

/// Failures that abort a run. Down sites and notification failures are not
/// errors; they are part of the [`RunResult`].
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Log(#[from] LogError),
}

/// Orchestrates a run: probe → aggregate → log → notify.
pub struct RunOrchestrator<'a> {
    prober: &'a dyn Prober,
    notifier: &'a dyn Notifier,
    run_log: &'a dyn RunLog,
}

impl<'a> RunOrchestrator<'a> {
    #[must_use]
    pub const fn new(
        prober: &'a dyn Prober,
        notifier: &'a dyn Notifier,
        run_log: &'a dyn RunLog,
    ) -> Self {
        Self {
            prober,
            notifier,
            run_log,
        }
    }

    /// Load the run configuration from `source`, then [`run`](Self::run).
    ///
    /// A missing or malformed document is logged and treated as no config.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub async fn run_from(
        &self,
        source: &dyn ConfigSource,
        force_notify: bool,
    ) -> Result<RunResult, RunError> {
        let config = match source.load() {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        };
        self.run(config, force_notify).await
    }

    /// Run one probe cycle over `config`.
    ///
    /// Without a config nothing is logged or sent. When a site is down the
    /// summary is logged and always sent to the recipient; when all sites are
    /// up it is logged and sent only if `force_notify` is set.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Probe` if a probe fails with a transport error, in
    /// which case nothing is logged, or `RunError::Log` if the summary
    /// cannot be appended to the run log.
    pub async fn run(
        &self,
        config: Option<RunConfig>,
        force_notify: bool,
    ) -> Result<RunResult, RunError> {
        let Some(config) = config else {
            return Ok(RunResult {
                success: false,
                message: NO_CONFIG_MESSAGE.to_string(),
                notification: NotificationStatus::NotRequested,
                verdict: None,
            });
        };

        let verdict = RunAggregator::new(self.prober)
            .run_all(&config.endpoints)
            .await?;

        if verdict.all_up() {
            tracing::debug!("all {} site(s) up", config.endpoints.len());
            self.run_log.append(verdict.summary_message())?;

            let notification = if force_notify {
                self.dispatch(&config.recipient, verdict.summary_message())
                    .await
            } else {
                NotificationStatus::NotRequested
            };

            Ok(RunResult {
                success: true,
                message: ALL_UP_MESSAGE.to_string(),
                notification,
                verdict: Some(verdict),
            })
        } else {
            tracing::warn!("{} site(s) down", verdict.down_endpoints().len());
            self.run_log
                .append(&format!("{}\n", verdict.summary_message()))?;

            let notification = self
                .dispatch(&config.recipient, verdict.summary_message())
                .await;

            Ok(RunResult {
                success: false,
                message: verdict.summary_message().to_string(),
                notification,
                verdict: Some(verdict),
            })
        }
    }

    async fn dispatch(&self, recipient: &str, message: &str) -> NotificationStatus {
        match self.notifier.send(recipient, message).await {
            Ok(()) => {
                tracing::info!("Message sent to {recipient}");
                NotificationStatus::Sent
            }
            Err(e) => {
                tracing::warn!("Notification failed: {e}");
                NotificationStatus::Failed(e.to_string())
            }
        }
    }
}
