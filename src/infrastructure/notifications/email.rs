use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::application::config::NotificationConfig;
use crate::domain::ports::notifier::{NotificationError, Notifier};

/// Login for the SMTP relay. The username doubles as the sender address.
#[derive(Clone)]
pub struct SmtpCredentials {
    username: String,
    password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SmtpCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if either variable is
    /// unset or empty.
    pub fn from_env(username_var: &str, password_var: &str) -> Result<Self, NotificationError> {
        Self::from_lookup(username_var, password_var, |key| std::env::var(key).ok())
    }

    /// Read credentials through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if either variable is
    /// missing or empty.
    pub fn from_lookup(
        username_var: &str,
        password_var: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, NotificationError> {
        let read = |key: &str| {
            lookup(key).filter(|v| !v.trim().is_empty()).ok_or_else(|| {
                NotificationError::ChannelUnavailable(format!("{key} is not set"))
            })
        };
        Ok(Self {
            username: read(username_var)?,
            password: read(password_var)?,
        })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Sends run summaries as plain-text mail through an authenticated relay.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    subject: String,
}

impl EmailNotifier {
    /// Connects to `relay` over implicit TLS on `port`.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::InvalidAddress` if the username is not a
    /// mail address, or `ChannelUnavailable` if the relay's TLS parameters
    /// cannot be built.
    pub fn new(
        relay: &str,
        port: u16,
        timeout: Duration,
        subject: &str,
        credentials: SmtpCredentials,
    ) -> Result<Self, NotificationError> {
        let sender = parse_mailbox(&credentials.username)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)
            .map_err(|e| {
                NotificationError::ChannelUnavailable(format!("SMTP relay {relay}: {e}"))
            })?
            .port(port)
            .timeout(Some(timeout))
            .credentials(Credentials::new(credentials.username, credentials.password))
            .build();

        Ok(Self::with_transport(transport, sender, subject))
    }

    /// # Errors
    ///
    /// See [`EmailNotifier::new`].
    pub fn from_config(
        config: &NotificationConfig,
        credentials: SmtpCredentials,
    ) -> Result<Self, NotificationError> {
        Self::new(
            &config.smtp_relay,
            config.smtp_port,
            Duration::from_secs(config.smtp_timeout_secs),
            &config.subject,
            credentials,
        )
    }

    #[must_use]
    pub fn with_transport(
        transport: AsyncSmtpTransport<Tokio1Executor>,
        sender: Mailbox,
        subject: &str,
    ) -> Self {
        Self {
            transport,
            sender,
            subject: subject.to_string(),
        }
    }

    fn build_message(&self, recipient: &str, body: &str) -> Result<Message, NotificationError> {
        Message::builder()
            .from(self.sender.clone())
            .to(parse_mailbox(recipient)?)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotificationError::SendFailed(format!("cannot build message: {e}")))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotificationError::InvalidAddress(format!("{address}: {e}")))
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError> {
        let email = self.build_message(recipient, message)?;
        self.transport
            .send(email)
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
        Ok(())
    }
}
