use serde::Serialize;

use super::verdict::RunVerdict;

/// What happened to the notification attempt of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum NotificationStatus {
    NotRequested,
    Sent,
    Failed(String),
}

/// Outcome of one complete run, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub message: String,
    pub notification: NotificationStatus,
    /// Absent when the run stopped before probing.
    pub verdict: Option<RunVerdict>,
}
