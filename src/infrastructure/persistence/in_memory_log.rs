use std::sync::Mutex;

use crate::domain::ports::run_log::{LogError, RunLog};

/// In-memory run log for testing purposes.
pub struct InMemoryRunLog {
    entries: Mutex<Vec<String>>,
}

impl InMemoryRunLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Entries in append order. Empty if the lock is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryRunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLog for InMemoryRunLog {
    fn append(&self, entry: &str) -> Result<(), LogError> {
        self.entries
            .lock()
            .map_err(|_| LogError::WriteFailed("lock poisoned".into()))?
            .push(entry.to_string());
        Ok(())
    }
}
