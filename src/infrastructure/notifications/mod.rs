pub mod disabled;
pub mod email;

use crate::application::config::NotificationConfig;
use crate::domain::ports::Notifier;
use crate::domain::value_objects::ContactType;

use self::disabled::DisabledNotifier;
use self::email::{EmailNotifier, SmtpCredentials};

/// Create the notifier for the configured contact type, reading credentials
/// from the process environment.
///
/// Returns [`DisabledNotifier`] when the channel cannot be set up.
#[must_use]
pub fn create_notifier(config: &NotificationConfig) -> Box<dyn Notifier> {
    create_notifier_with(config, |key| std::env::var(key).ok())
}

/// Same as [`create_notifier`], resolving credential variables through `lookup`.
#[must_use]
pub fn create_notifier_with(
    config: &NotificationConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Box<dyn Notifier> {
    match config.contact_type {
        ContactType::Email => {
            let notifier =
                SmtpCredentials::from_lookup(&config.username_env, &config.password_env, lookup)
                    .and_then(|credentials| EmailNotifier::from_config(config, credentials));
            match notifier {
                Ok(notifier) => Box::new(notifier),
                Err(e) => {
                    tracing::warn!(
                        contact_type = %config.contact_type,
                        "email notifications disabled: {e}"
                    );
                    Box::new(DisabledNotifier::new(e.to_string()))
                }
            }
        }
    }
}
