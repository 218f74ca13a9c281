//! Per-image result reporting.
//!
//! The runner only describes what happened; a [`Reporter`] decides how it
//! looks. [`PlainReporter`] writes the plain text lines to any writer.

use crate::error::TagFetchError;
use std::io::{self, Write};


/// Line announcing that tags of an image are being fetched.
pub fn fetching_line(registry: &str, image: &str) -> String {
    format!("Fetching tags for {} from {}...", image, registry)
}

/// Line reporting a failed fetch.
pub fn error_line(registry: &str, image: &str, error: &TagFetchError) -> String {
    format!("Error fetching tags for {} from {}: {}", image, registry, error)
}

/// Line reporting an image without (remaining) tags.
pub fn no_tags_line(registry: &str, image: &str) -> String {
    format!("No tags found for {} in {}.", image, registry)
}

/// Header printed above the latest tags of an image.
pub fn latest_header(image: &str, max: usize) -> String {
    format!("Latest {} tags for {}:", max, image)
}

/// Receives the outcome of each (registry, image) pair, in processing order.
pub trait Reporter {
    /// Called before the tags of an image are fetched.
    fn fetching(&mut self, registry: &str, image: &str) -> io::Result<()>;

    /// Called when the tags of an image could not be fetched.
    fn fetch_failed(&mut self, registry: &str, image: &str, error: &TagFetchError)
    -> io::Result<()>;

    /// Called when an image has no tags left to show.
    fn no_tags(&mut self, registry: &str, image: &str) -> io::Result<()>;

    /// Called with the selected tags of an image, most recent first.
    fn latest(&mut self, image: &str, max: usize, tags: &[String]) -> io::Result<()>;
}

/// Writes uncolored report lines.
#[derive(Debug)]
pub struct PlainReporter<W> {
    out: W,
}

impl<W: Write> PlainReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn fetching(&mut self, registry: &str, image: &str) -> io::Result<()> {
        writeln!(self.out, "{}", fetching_line(registry, image))?;
        self.out.flush()
    }

    fn fetch_failed(
        &mut self,
        registry: &str,
        image: &str,
        error: &TagFetchError,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", error_line(registry, image, error))
    }

    fn no_tags(&mut self, registry: &str, image: &str) -> io::Result<()> {
        writeln!(self.out, "{}", no_tags_line(registry, image))
    }

    fn latest(&mut self, image: &str, max: usize, tags: &[String]) -> io::Result<()> {
        writeln!(self.out, "{}", latest_header(image, max))?;
        for tag in tags {
            writeln!(self.out, "{}", tag)?;
        }
        writeln!(self.out)
    }
}
