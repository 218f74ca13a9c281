use crate::context::VerbosityLevel;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a verbosity level
pub fn filter_directive(verbosity: VerbosityLevel) -> &'static str {
    match verbosity {
        VerbosityLevel::Normal => "warn",
        VerbosityLevel::Verbose => "debug",
        VerbosityLevel::VeryVerbose => "trace",
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Log events go to stderr; stdout only carries the tag report.
pub fn init(verbosity: VerbosityLevel) {
    let filter = EnvFilter::new(filter_directive(verbosity));

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
