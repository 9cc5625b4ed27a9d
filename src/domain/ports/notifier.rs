use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to `recipient` over this notifier's channel.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the message cannot be built,
    /// the channel is unavailable, or delivery fails.
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError>;
}
