//! Tag exclusion by regular expression.

use crate::error::{Result, TagFetchError};
use regex::Regex;

#[cfg(test)]
mod tests;

/// Drops tags matching any of a registry's exclude patterns.
///
/// Patterns are unanchored: `-rc` excludes `1.0-rc1`; use `^`/`$` to anchor.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    patterns: Vec<Regex>,
}

impl TagFilter {
    /// Compiles the given patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagfetch::TagFilter;
    ///
    /// let filter = TagFilter::new(&["-rc", "^sha-"]).unwrap();
    /// assert!(filter.is_excluded("1.0-rc1"));
    /// assert!(!filter.is_excluded("1.0"));
    /// ```
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()).map_err(|e| TagFetchError::pattern(p.as_ref(), e)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns true if no pattern is configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if `tag` matches any pattern.
    pub fn is_excluded(&self, tag: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(tag))
    }

    /// Keeps the tags that match no pattern, preserving their order.
    pub fn apply(&self, tags: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return tags;
        }
        tags.into_iter().filter(|t| !self.is_excluded(t)).collect()
    }
}
