use colored::Colorize;

use super::status_fmt::{colorize_latency, print_section_header, status_badge};
use crate::domain::entities::probe::ProbeOutcome;
use crate::domain::entities::run_result::{NotificationStatus, RunResult};

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

#[must_use]
pub fn format_outcome(outcome: &ProbeOutcome) -> String {
    let detail = match (outcome.reachable(), outcome.latency_seconds()) {
        (true, Some(latency)) => colorize_latency(latency).to_string(),
        _ => outcome.message().dimmed().to_string(),
    };
    format!(
        "{} {} {}",
        status_badge(outcome.status()),
        sanitize_terminal(outcome.endpoint().as_str()).bold(),
        detail
    )
}

#[must_use]
pub fn format_notification(status: &NotificationStatus) -> Option<String> {
    match status {
        NotificationStatus::NotRequested => None,
        NotificationStatus::Sent => Some(format!("{}", "✉ Notification sent".green())),
        NotificationStatus::Failed(reason) => Some(format!(
            "{} {}",
            "✉ Notification failed:".yellow().bold(),
            sanitize_terminal(reason)
        )),
    }
}

pub fn print_run_result(result: &RunResult) {
    print_section_header("🌐 Uptime check");

    if let Some(verdict) = &result.verdict {
        for outcome in verdict.outcomes() {
            println!("  {}", format_outcome(outcome));
        }
        println!();
    }

    let message = sanitize_terminal(&result.message);
    if result.success {
        println!("{}", message.green().bold());
    } else {
        println!("{}", message.red().bold());
    }

    if let Some(line) = format_notification(&result.notification) {
        println!("{line}");
    }
}
