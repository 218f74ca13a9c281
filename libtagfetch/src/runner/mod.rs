//! Walks every configured (registry, image) pair.
//!
//! Pairs are processed one at a time in configuration order. A pair that
//! cannot be fetched is reported and skipped; it never stops the run.

use crate::client::RegistryClient;
use crate::config::{Config, RegistryEntry};
use crate::error::Result;
use crate::filter::TagFilter;
use crate::report::Reporter;
use crate::sort;
use std::io;
use tracing::debug;


/// What happened to one (registry, image) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given number of tags was shown.
    Printed(usize),
    /// The image has no tags, or all of them were excluded.
    Empty,
    /// The tags could not be fetched.
    Failed,
}

/// Counts of pair outcomes over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub printed: usize,
    pub empty: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        self.processed += 1;
        match outcome {
            Outcome::Printed(_) => self.printed += 1,
            Outcome::Empty => self.empty += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Fetches, filters, sorts and reports the tags of every configured image.
pub struct Runner<C> {
    config: Config,
    client: C,
    filters: Vec<TagFilter>,
}

impl<C: RegistryClient> Runner<C> {
    /// Creates a runner for `config`.
    ///
    /// # Errors
    /// Returns [`crate::TagFetchError::Pattern`] if an exclude pattern does
    /// not compile.
    pub fn new(config: Config, client: C) -> Result<Self> {
        let filters = config
            .registries
            .iter()
            .map(|entry| TagFilter::new(entry.exclude.as_slice()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config,
            client,
            filters,
        })
    }

    /// Configuration this runner was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Processes every pair in configuration order.
    ///
    /// Only a failure to write a report aborts the run.
    pub fn run(&self, reporter: &mut dyn Reporter) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (entry, filter) in self.config.registries.iter().zip(&self.filters) {
            let max = self.config.max_for(entry);
            for image in &entry.images {
                let outcome = self.process(entry, filter, image, max, reporter)?;
                summary.record(outcome);
            }
        }

        debug!(
            "Processed {} images: {} shown, {} without tags, {} failed",
            summary.processed, summary.printed, summary.empty, summary.failed
        );

        Ok(summary)
    }

    fn process(
        &self,
        entry: &RegistryEntry,
        filter: &TagFilter,
        image: &str,
        max: usize,
        reporter: &mut dyn Reporter,
    ) -> io::Result<Outcome> {
        let registry = entry.registry.as_str();
        reporter.fetching(registry, image)?;

        let tags = match self.client.list_tags(registry, image) {
            Ok(tags) => tags,
            Err(e) => {
                debug!("Failed to list tags for {}/{}: {}", registry, image, e);
                reporter.fetch_failed(registry, image, &e)?;
                return Ok(Outcome::Failed);
            }
        };

        let fetched = tags.len();
        let tags = filter.apply(tags);
        if tags.len() != fetched {
            debug!(
                "Excluded {} of {} tags for {}/{}",
                fetched - tags.len(),
                fetched,
                registry,
                image
            );
        }

        if tags.is_empty() {
            reporter.no_tags(registry, image)?;
            return Ok(Outcome::Empty);
        }

        let latest = sort::latest(tags, max);
        reporter.latest(image, max, &latest)?;
        Ok(Outcome::Printed(latest.len()))
    }
}
