use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::run_log::{LogError, RunLog};

const DEFAULT_LOG_PATH: &str = "log.txt";

/// Appends run summaries to a plain text file.
///
/// The file is opened for each entry and closed before `append` returns.
pub struct LogFileSink {
    path: PathBuf,
}

impl LogFileSink {
    #[must_use]
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LogFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl RunLog for LogFileSink {
    fn append(&self, entry: &str) -> Result<(), LogError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LogError::WriteFailed(format!("cannot create log directory: {e}"))
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LogError::WriteFailed(format!("cannot open log file: {e}")))?;

        file.write_all(entry.as_bytes())
            .map_err(|e| LogError::WriteFailed(format!("cannot write log file: {e}")))
    }
}
