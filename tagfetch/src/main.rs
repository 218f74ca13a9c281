use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod context;
mod format;
mod logging;

/// Tagfetch - latest container image tags
///
/// Lists the tags of every image configured in config.yaml with skopeo and
/// prints the most recent ones, ordered version-aware.
#[derive(Parser, Debug)]
#[command(name = "tagfetch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: config.yaml, or $TAGFETCH_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of tags to show per image, overriding every `max` in the configuration
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    max: Option<i64>,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(
        cli.config,
        cli.max,
        format::ColorChoice::from(cli.color.as_str()),
        context::VerbosityLevel::from_count(cli.verbose),
    );
    logging::init(ctx.verbosity);

    match cli.command {
        Some(Commands::Version) => {
            commands::version::print_version();
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
        None => commands::run::handle_run(&ctx),
    }
}
