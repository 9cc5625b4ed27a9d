use crate::application::services::orchestrator::RunOrchestrator;
use crate::domain::entities::run_result::RunResult;
use crate::domain::ports::config_source::ConfigSource;
use crate::presentation::cli::formatters::run_fmt;

/// Runs one check over the sites from `source` and prints the result.
///
/// Returns whether every site was up.
///
/// # Errors
///
/// Returns an error if a probe fails with a transport error, the run log
/// cannot be written, or JSON serialization fails.
pub async fn run_check(
    orchestrator: &RunOrchestrator<'_>,
    source: &dyn ConfigSource,
    force_notify: bool,
    json: bool,
) -> anyhow::Result<bool> {
    let result = orchestrator.run_from(source, force_notify).await?;

    if json {
        print_result_json(&result)?;
    } else {
        run_fmt::print_run_result(&result);
    }

    Ok(result.success)
}

fn print_result_json(result: &RunResult) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(result)?;
    println!("{output}");
    Ok(())
}
