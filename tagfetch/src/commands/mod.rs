/// Default command: report the latest tags of every configured image
pub mod run;

/// Version command handlers
pub mod version;
