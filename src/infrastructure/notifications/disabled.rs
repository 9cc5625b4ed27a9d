use async_trait::async_trait;

use crate::domain::ports::notifier::{NotificationError, Notifier};

/// Stand-in used when the configured channel could not be set up.
///
/// Every send fails with the reason the channel is unavailable, so runs keep
/// working and the missing channel shows up on each notification attempt.
pub struct DisabledNotifier {
    reason: String,
}

impl DisabledNotifier {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send(&self, _recipient: &str, _message: &str) -> Result<(), NotificationError> {
        Err(NotificationError::ChannelUnavailable(self.reason.clone()))
    }
}
