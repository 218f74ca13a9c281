//! Version-aware tag ordering.
//!
//! A tag is split at digit runs into alternating literal and numeric
//! segments. `"v1.10-rc2"` becomes
//! `["v", 1, ".", 10, "-rc", 2, ""]`. Keys always start and end with a
//! literal (possibly empty), so two keys hold the same kind of segment at
//! every position they share.

use std::cmp::{Ordering, Reverse};
use std::fmt;


/// One piece of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A run of ASCII digits, stored without leading zeros.
    Numeric(String),
    /// The text between two digit runs.
    Literal(String),
}

impl Segment {
    /// Builds a numeric segment from a run of ASCII digits.
    fn numeric(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Segment::Numeric("0".to_string())
        } else {
            Segment::Numeric(trimmed.to_string())
        }
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Without leading zeros a longer digit run is a larger number.
            (Segment::Numeric(a), Segment::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Literal(a), Segment::Literal(b)) => a.cmp(b),
            (Segment::Numeric(_), Segment::Literal(_)) => Ordering::Less,
            (Segment::Literal(_), Segment::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Numeric(n) => write!(f, "{}", n),
            Segment::Literal(s) => write!(f, "{:?}", s),
        }
    }
}

/// Comparison key for a tag, compared segment by segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(Vec<Segment>);

impl SortKey {
    /// Derives the key of `tag`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagfetch::SortKey;
    ///
    /// assert!(SortKey::parse("v10") > SortKey::parse("v2"));
    /// assert!(SortKey::parse("1.10.0") > SortKey::parse("1.9.0"));
    /// assert_eq!(SortKey::parse("1.02"), SortKey::parse("1.2"));
    /// ```
    pub fn parse(tag: &str) -> Self {
        let bytes = tag.as_bytes();
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if !bytes[i].is_ascii_digit() {
                i += 1;
                continue;
            }
            let digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            // ASCII digits never sit inside a multi-byte character, so both
            // boundaries are valid char boundaries.
            segments.push(Segment::Literal(tag[literal_start..digits_start].to_string()));
            segments.push(Segment::numeric(&tag[digits_start..i]));
            literal_start = i;
        }
        segments.push(Segment::Literal(tag[literal_start..].to_string()));

        SortKey(segments)
    }

    /// Segments of the key, in tag order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl From<&str> for SortKey {
    fn from(tag: &str) -> Self {
        SortKey::parse(tag)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", segment)?;
        }
        write!(f, ")")
    }
}

/// Sorts tags from most to least significant version.
///
/// The sort is stable: tags with equal keys keep the order they were given
/// in.
///
/// # Examples
///
/// ```
/// use libtagfetch::sort::sort_descending;
///
/// let mut tags = vec!["1.2.0".to_string(), "1.10.0".to_string(), "1.9.0".to_string()];
/// sort_descending(&mut tags);
/// assert_eq!(tags, vec!["1.10.0", "1.9.0", "1.2.0"]);
/// ```
pub fn sort_descending(tags: &mut [String]) {
    tags.sort_by_cached_key(|tag| Reverse(SortKey::parse(tag)));
}

/// Returns at most `max` tags, most significant first.
pub fn latest(mut tags: Vec<String>, max: usize) -> Vec<String> {
    sort_descending(&mut tags);
    tags.truncate(max);
    tags
}
