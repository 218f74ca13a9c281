use crate::context::AppContext;
use crate::format::{self, ConsoleReporter};
use libtagfetch::{Config, RegistryClient, Reporter, RunSummary, Runner, Skopeo, TagFetchError};
use tracing::debug;

/// Handle the default command
///
/// Exits with status 1 when skopeo is missing or the configuration cannot
/// be used. Failures of individual images do not change the exit status.
/// A reader that stops early, e.g. `tagfetch | head -1`, ends the run quietly.
pub fn handle_run(ctx: &AppContext) {
    let mut reporter = ConsoleReporter::stdout(ctx.color);

    match execute(ctx, Skopeo::locate, &mut reporter) {
        Ok(summary) => {
            debug!(
                "Done: {} of {} images shown",
                summary.printed, summary.processed
            );
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed, stopping: {}", e);
        }
        Err(e) => {
            format::fatal(&e);
            std::process::exit(1);
        }
    }
}

/// Runs the whole pipeline with the given client factory
///
/// The tool is located before the configuration is read, so a missing tool
/// is reported even when the configuration is missing too.
pub fn execute<C, F>(
    ctx: &AppContext,
    locate: F,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, TagFetchError>
where
    C: RegistryClient,
    F: FnOnce() -> libtagfetch::Result<C>,
{
    let client = locate()?;

    debug!("Loading configuration from {}", ctx.config_path.display());
    let mut config = Config::load(&ctx.config_path)?;
    ctx.apply(&mut config);
    debug!(
        "Loaded {} registries with {} images",
        config.registries.len(),
        config.image_count()
    );

    let runner = Runner::new(config, client)?;
    runner
        .run(reporter)
        .map_err(|e| TagFetchError::io(format!("failed to write report: {}", e), e))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
