use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// upwatch: website uptime checker
///
/// Checks the configured sites, appends the result to the run log and
/// mails the recipient when a site is down.
#[derive(Parser, Debug)]
#[command(name = "upwatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the JSON sites document (overrides `general.sites_file`)
    #[arg(short, long, global = true)]
    pub sites: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every site once
    #[command(alias = "c")]
    Check {
        /// Send the report even when all sites are up
        #[arg(long)]
        sendmail: bool,
    },

    /// Check every site once and always send the report
    Sendmail,

    /// Keep checking at a fixed interval until interrupted
    #[command(alias = "w")]
    Watch {
        /// Interval between checks in seconds (default: config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Send the report after every check, even when all sites are up
        #[arg(long)]
        sendmail: bool,
    },
}

impl Commands {
    /// Whether the report is sent even when every site is up.
    #[must_use]
    pub const fn force_notify(&self) -> bool {
        match self {
            Self::Check { sendmail } | Self::Watch { sendmail, .. } => *sendmail,
            Self::Sendmail => true,
        }
    }
}
