use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::endpoint::{join_endpoints, Endpoint};
use super::probe::ProbeOutcome;

/// Day-month-year hour:minute, e.g. `27-05-2024 14:05`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

#[must_use]
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Aggregated up/down determination for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunVerdict {
    all_up: bool,
    down_endpoints: Vec<Endpoint>,
    summary_message: String,
    timestamp: String,
    outcomes: Vec<ProbeOutcome>,
}

impl RunVerdict {
    /// Builds the verdict from every outcome of the run, in probe order.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<ProbeOutcome>, timestamp: String) -> Self {
        let down_endpoints: Vec<Endpoint> = outcomes
            .iter()
            .filter(|o| !o.reachable())
            .map(|o| o.endpoint().clone())
            .collect();
        let all_up = down_endpoints.is_empty();

        let summary_message = if all_up {
            format!(
                "{timestamp}: All sites up and running - {}",
                join_endpoints(outcomes.iter().map(ProbeOutcome::endpoint))
            )
        } else {
            format!(
                "{timestamp}: Not all sites up. Sites down are - {}",
                join_endpoints(&down_endpoints)
            )
        };

        Self {
            all_up,
            down_endpoints,
            summary_message,
            timestamp,
            outcomes,
        }
    }

    #[must_use]
    pub const fn all_up(&self) -> bool {
        self.all_up
    }

    #[must_use]
    pub fn down_endpoints(&self) -> &[Endpoint] {
        &self.down_endpoints
    }

    #[must_use]
    pub fn summary_message(&self) -> &str {
        &self.summary_message
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }
}
