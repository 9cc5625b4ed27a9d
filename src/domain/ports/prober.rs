use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::endpoint::Endpoint;
use crate::domain::entities::probe::ProbeOutcome;

/// Probe failures that are not an availability verdict.
///
/// A refused connection or a timeout is a down endpoint, reported as a
/// [`ProbeOutcome`]. These errors are everything else and abort the run.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("transport error while probing {url}: {reason}")]
    Transport { url: String, reason: String },
    #[error("HTTP client unavailable: {0}")]
    ClientInit(String),
}

#[async_trait]
pub trait Prober: Send + Sync {
    /// Perform one request against `endpoint` and classify the result.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Transport` when the request fails for a reason
    /// other than connecting (malformed URL, protocol violation).
    async fn probe(&self, endpoint: &Endpoint) -> Result<ProbeOutcome, ProbeError>;
}
