use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;
use crate::domain::value_objects::endpoint_status::EndpointStatus;

pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to the website";

const HTTP_OK: u16 = 200;

/// Classified result of a single probe against one endpoint.
///
/// Built only through [`ProbeOutcome::up`], [`ProbeOutcome::from_status`] and
/// [`ProbeOutcome::unreachable`], so a reachable outcome always carries a
/// 200 status and a measured latency, and an unreachable one never carries
/// a 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    endpoint: Endpoint,
    reachable: bool,
    status_code: Option<u16>,
    latency_seconds: Option<f64>,
    failure_reason: Option<String>,
}

impl ProbeOutcome {
    #[must_use]
    pub const fn up(endpoint: Endpoint, latency_seconds: f64) -> Self {
        Self {
            endpoint,
            reachable: true,
            status_code: Some(HTTP_OK),
            latency_seconds: Some(latency_seconds),
            failure_reason: None,
        }
    }

    /// Classify a received response: 200 is up with the measured latency,
    /// any other status is down and keeps only its code.
    #[must_use]
    pub fn from_status(endpoint: Endpoint, status_code: u16, latency_seconds: f64) -> Self {
        if status_code == HTTP_OK {
            return Self::up(endpoint, latency_seconds);
        }
        Self {
            endpoint,
            reachable: false,
            status_code: Some(status_code),
            latency_seconds: None,
            failure_reason: Some(format!("Website is down with status code: {status_code}")),
        }
    }

    #[must_use]
    pub fn unreachable(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            reachable: false,
            status_code: None,
            latency_seconds: None,
            failure_reason: Some(CONNECT_FAILURE_MESSAGE.to_string()),
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    #[must_use]
    pub const fn reachable(&self) -> bool {
        self.reachable
    }

    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    #[must_use]
    pub const fn latency_seconds(&self) -> Option<f64> {
        self.latency_seconds
    }

    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> EndpointStatus {
        EndpointStatus::Unknown.resolve(self.reachable)
    }

    /// Human-readable description of the probe result.
    #[must_use]
    pub fn message(&self) -> String {
        match (&self.failure_reason, self.latency_seconds) {
            (Some(reason), _) => reason.clone(),
            (None, Some(latency)) => {
                format!("Website is up and running. Response time: {latency:.2} seconds")
            }
            (None, None) => "Website is up and running".to_string(),
        }
    }
}
