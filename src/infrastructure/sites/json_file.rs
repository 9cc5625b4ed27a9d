use std::path::{Path, PathBuf};

use crate::domain::entities::run_config::RunConfig;
use crate::domain::ports::config_source::{ConfigError, ConfigSource};

/// Reads the recipient and site list from a JSON document shaped like
/// `{"RECIPIENT_EMAIL": "...", "WEBSITE_URLS": ["..."]}`.
pub struct JsonSiteFile {
    path: PathBuf,
}

impl JsonSiteFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for JsonSiteFile {
    fn load(&self) -> Result<RunConfig, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(self.path.clone())
            } else {
                ConfigError::Unreadable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Malformed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}
