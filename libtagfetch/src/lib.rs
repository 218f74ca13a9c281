//! Tagfetch - latest container image tags across registries
//!
//! Tagfetch lists the tags of a configured set of images, orders them with a
//! version-aware comparison and reports the most recent ones per image.
//!
//! # Quick Start
//!
//! ```no_run
//! use libtagfetch::{Config, PlainReporter, Runner, Skopeo};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Locate the skopeo binary used to talk to registries
//!     let skopeo = Skopeo::locate()?;
//!
//!     // Load the tracked images
//!     let config = Config::load("config.yaml")?;
//!
//!     // Print the latest tags of every image to stdout
//!     let runner = Runner::new(config, skopeo)?;
//!     let mut reporter = PlainReporter::new(std::io::stdout());
//!     runner.run(&mut reporter)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Runner`] - Walks every configured (registry, image) pair
//! - [`Config`] - Registries, images and per-image tag limits
//! - [`RegistryClient`] - Lists the tags of one image; [`Skopeo`] is the
//!   process-backed implementation
//! - [`SortKey`] - Version-aware ordering key derived from a tag
//! - [`Reporter`] - Receives the per-image results for display

#![warn(clippy::all)]

/// Returns the libtagfetch crate version.
///
/// # Examples
///
/// ```
/// let version = libtagfetch::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use client::{RegistryClient, Skopeo};
pub use config::{Config, RegistryEntry};
pub use error::{Result, TagFetchError};
pub use filter::TagFilter;
pub use report::{PlainReporter, Reporter};
pub use runner::{Outcome, RunSummary, Runner};
pub use sort::{Segment, SortKey};

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod runner;
pub mod sort;
