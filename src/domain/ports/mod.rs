pub mod config_source;
pub mod notifier;
pub mod prober;
pub mod run_log;

pub use config_source::{ConfigError, ConfigSource};
pub use notifier::{NotificationError, Notifier};
pub use prober::{ProbeError, Prober};
pub use run_log::{LogError, RunLog};
