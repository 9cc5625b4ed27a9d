use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use upwatch::application::config::AppConfig;
use upwatch::application::services::orchestrator::RunOrchestrator;
use upwatch::infrastructure::notifications::create_notifier;
use upwatch::infrastructure::persistence::log_file::LogFileSink;
use upwatch::infrastructure::probing::http::HttpProber;
use upwatch::infrastructure::sites::json_file::JsonSiteFile;
use upwatch::presentation::cli::app::{Cli, Commands};
use upwatch::presentation::cli::commands::check::run_check;
use upwatch::presentation::cli::commands::watch::run_watch;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  UPWATCH · Website uptime checker".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // SMTP credentials may live in a local .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI: main.rs is the only place that knows concrete types
    let prober = HttpProber::from_config(&config.probe)?;
    let notifier = create_notifier(&config.notifications);
    let run_log = LogFileSink::new(&config.log.path);
    let sites = JsonSiteFile::new(cli.sites.unwrap_or_else(|| config.general.sites_path()));
    tracing::debug!(
        sites = %sites.path().display(),
        log = %run_log.path().display(),
        "resolved paths"
    );

    let orchestrator = RunOrchestrator::new(&prober, &*notifier, &run_log);

    match cli.command {
        Some(Commands::Watch { interval, sendmail }) => {
            if !cli.json {
                print_banner();
            }
            let interval_secs = interval.unwrap_or(config.general.interval_secs);
            run_watch(&orchestrator, &sites, interval_secs, sendmail, cli.json).await?;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let force_notify = command.as_ref().is_some_and(Commands::force_notify);
            let all_up = run_check(&orchestrator, &sites, force_notify, cli.json).await?;
            Ok(if all_up {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
