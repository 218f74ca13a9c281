//! Application context that holds resolved settings
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values (applied when the file is loaded)
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.
//! The configuration file itself is only read after the registry tool has
//! been found, so the context stores its path rather than its contents.

use crate::format::ColorChoice;
use libtagfetch::Config;
use libtagfetch::config::DEFAULT_CONFIG_FILE;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the configuration file path
pub const CONFIG_ENV: &str = "TAGFETCH_CONFIG";

/// Environment variable overriding the color choice
pub const COLOR_ENV: &str = "TAGFETCH_COLOR";

/// How much diagnostic logging goes to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings only
    Normal,
    /// Debug events (`-v`)
    Verbose,
    /// Trace events, including the commands that are run (`-vv`)
    VeryVerbose,
}

impl VerbosityLevel {
    /// Maps the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            _ => VerbosityLevel::VeryVerbose,
        }
    }
}

/// Application context with resolved settings
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Configuration file to load
    pub config_path: PathBuf,
    /// Replaces the configured top-level `max` when set
    pub max_override: Option<i64>,
    /// Color choice for console output
    pub color: ColorChoice,
    /// Logging verbosity
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(
        cli_config: Option<PathBuf>,
        cli_max: Option<i64>,
        cli_color: ColorChoice,
        verbosity: VerbosityLevel,
    ) -> Self {
        Self::resolve(cli_config, cli_max, cli_color, verbosity, |key| {
            env::var(key).ok()
        })
    }

    /// Same as [`AppContext::build`] with an explicit environment lookup
    pub fn resolve<F>(
        cli_config: Option<PathBuf>,
        cli_max: Option<i64>,
        cli_color: ColorChoice,
        verbosity: VerbosityLevel,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // 1. Start with defaults
        let mut config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        let mut color = ColorChoice::Auto;

        // 3. Apply environment variable overrides
        if let Some(path) = lookup(CONFIG_ENV).filter(|p| !p.is_empty()) {
            config_path = PathBuf::from(path);
        }
        let env_color = lookup(COLOR_ENV);
        if let Some(ref value) = env_color {
            color = ColorChoice::from(value.as_str());
        }

        // 4. Apply CLI flag overrides (highest priority)
        // Auto is clap's default, so it only wins when no env var was given
        if let Some(path) = cli_config {
            config_path = path;
        }
        if cli_color != ColorChoice::Auto || env_color.is_none() {
            color = cli_color;
        }

        Self {
            config_path,
            max_override: cli_max,
            color,
            verbosity,
        }
    }

    /// Applies CLI overrides to a freshly loaded configuration
    ///
    /// `--max` replaces the top-level value and every per-registry `max`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(max) = self.max_override {
            config.max = max;
            for entry in &mut config.registries {
                entry.max = None;
            }
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
