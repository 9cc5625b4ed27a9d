use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::value_objects::ContactType;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Location of the sites document and the `watch` interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_sites_file")]
    pub sites_file: String,
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

/// HTTP probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Request timeout in seconds. `0` waits indefinitely.
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

/// Run log destination (tilde-expanded at point of use).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_path")]
    pub path: String,
}

/// Contact channel and SMTP relay. Credentials are read from the named
/// environment variables, never from this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub contact_type: ContactType,
    #[serde(default = "default_smtp_relay")]
    pub smtp_relay: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_timeout")]
    pub smtp_timeout_secs: u64,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_username_env")]
    pub username_env: String,
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

// --- Defaults ---

fn default_sites_file() -> String {
    "config.json".into()
}

const fn default_interval() -> u64 {
    300
}

const fn default_probe_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("upwatch/", env!("CARGO_PKG_VERSION")).into()
}

const fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "log.txt".into()
}

fn default_smtp_relay() -> String {
    "smtp.gmail.com".into()
}

const fn default_smtp_port() -> u16 {
    465
}

const fn default_smtp_timeout() -> u64 {
    30
}

fn default_subject() -> String {
    "Email from uptime monitor".into()
}

fn default_username_env() -> String {
    "GMAIL_USERNAME".into()
}

fn default_password_env() -> String {
    "GMAIL_APP_PASSWORD".into()
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            sites_file: default_sites_file(),
            interval_secs: default_interval(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_probe_timeout(),
            user_agent: default_user_agent(),
            use_system_proxy: default_true(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            contact_type: ContactType::default(),
            smtp_relay: default_smtp_relay(),
            smtp_port: default_smtp_port(),
            smtp_timeout_secs: default_smtp_timeout(),
            subject: default_subject(),
            username_env: default_username_env(),
            password_env: default_password_env(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn sites_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.sites_file).as_ref())
    }
}

impl ProbeConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("upwatch").join("config.toml"))
    }
}
