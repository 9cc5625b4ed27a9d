use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::run_config::RunConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file '{0}' not found")]
    NotFound(PathBuf),
    #[error("config file '{path}' could not be read: {reason}")]
    Unreadable { path: PathBuf, reason: String },
    #[error("error parsing config file '{path}': {reason}")]
    Malformed { path: PathBuf, reason: String },
}

/// Provides the recipient and endpoint list for a run.
pub trait ConfigSource: Send + Sync {
    /// Load the run configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is missing, unreadable or malformed.
    fn load(&self) -> Result<RunConfig, ConfigError>;
}
