use chrono::Local;

use crate::domain::entities::endpoint::Endpoint;
use crate::domain::entities::verdict::{format_timestamp, RunVerdict};
use crate::domain::ports::prober::{ProbeError, Prober};
use crate::domain::value_objects::endpoint_status::EndpointStatus;

/// Probes every endpoint of a run, one after the other, and builds the verdict.
pub struct RunAggregator<'a> {
    prober: &'a dyn Prober,
}

impl<'a> RunAggregator<'a> {
    #[must_use]
    pub const fn new(prober: &'a dyn Prober) -> Self {
        Self { prober }
    }

    /// Probe `endpoints` in order, stamping the verdict with the local start time.
    ///
    /// # Errors
    ///
    /// Returns the first `ProbeError` raised by the prober. Endpoints after
    /// the failing one are not probed.
    pub async fn run_all(&self, endpoints: &[Endpoint]) -> Result<RunVerdict, ProbeError> {
        let timestamp = format_timestamp(&Local::now().naive_local());
        self.run_all_at(endpoints, timestamp).await
    }

    /// Same as [`run_all`](Self::run_all) with a caller-supplied timestamp.
    ///
    /// # Errors
    ///
    /// Returns the first `ProbeError` raised by the prober.
    pub async fn run_all_at(
        &self,
        endpoints: &[Endpoint],
        timestamp: String,
    ) -> Result<RunVerdict, ProbeError> {
        let mut outcomes = Vec::with_capacity(endpoints.len());

        for endpoint in endpoints {
            tracing::debug!("checking website {endpoint}");
            let outcome = self.prober.probe(endpoint).await?;
            if outcome.status() == EndpointStatus::Down {
                tracing::debug!("website down - {endpoint}");
            }
            outcomes.push(outcome);
        }

        Ok(RunVerdict::from_outcomes(outcomes, timestamp))
    }
}
