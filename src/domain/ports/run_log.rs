use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("run log write failed: {0}")]
    WriteFailed(String),
}

/// Append-only destination for run summaries.
pub trait RunLog: Send + Sync {
    /// Append `entry` exactly as given. No separator is added.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the entry cannot be written.
    fn append(&self, entry: &str) -> Result<(), LogError>;
}
