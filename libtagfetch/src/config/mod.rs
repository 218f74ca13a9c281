//! Tracked registries and images.
//!
//! The configuration is read once from a YAML file and is immutable
//! afterwards:
//!
//! ```yaml
//! max: 3
//! registries:
//!   - registry: quay.io
//!     images:
//!       - prometheus/prometheus
//!     exclude:
//!       - "-rc"
//! ```

use crate::error::{Result, TagFetchError};
use config::{Config as ConfigRs, File, FileFormat};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;


/// Conventional configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Number of tags shown per image when `max` is not configured.
pub const DEFAULT_MAX_TAGS: i64 = 3;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Number of tags to show per image. Zero or negative shows none.
    #[serde(default = "default_max", deserialize_with = "deserialize_max")]
    pub max: i64,

    /// Registries to query, in display order.
    pub registries: Vec<RegistryEntry>,
}

fn default_max() -> i64 {
    DEFAULT_MAX_TAGS
}

/// A registry and the images tracked on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Registry address, `host[:port]`.
    pub registry: String,

    /// Image names, e.g. `library/alpine`. A registry without images is
    /// skipped.
    #[serde(default)]
    pub images: Vec<String>,

    /// Regular expressions; matching tags are never shown.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Overrides the top-level `max` for this registry.
    #[serde(default, deserialize_with = "deserialize_optional_max")]
    pub max: Option<i64>,
}

// The YAML loader turns integers too large for an i64 into floats, and
// converting those back saturates. Values are checked here instead.
fn deserialize_max<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(MaxVisitor)?
        .ok_or_else(|| de::Error::invalid_type(Unexpected::Unit, &MaxVisitor))
}

fn deserialize_optional_max<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MaxVisitor)
}

struct MaxVisitor;

impl<'de> Visitor<'de> for MaxVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a whole number for `max` between {} and {}",
            i64::MIN,
            i64::MAX
        )
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Other(&format!("integer `{}`", v)), &self))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Other(&format!("integer `{}`", v)), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        Err(E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        v.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl Config {
    /// Parses a `Config` from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder().add_source(File::from_str(s, FileFormat::Yaml));

        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| TagFetchError::config_with_source(e.to_string(), None, e))
    }

    /// Loads a `Config` from a YAML file.
    ///
    /// A missing file is reported as [`TagFetchError::ConfigNotFound`], any
    /// other problem as [`TagFetchError::Config`]. Nothing is defaulted when
    /// loading fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TagFetchError::config_not_found(display.clone()),
            _ => TagFetchError::config_with_source(
                format!("failed to read {}: {}", display, e),
                Some(display.clone()),
                e,
            ),
        })?;

        Self::from_yaml_str(&contents).map_err(|e| match e {
            TagFetchError::Config {
                message, source, ..
            } => TagFetchError::Config {
                message,
                path: Some(display),
                source,
            },
            other => other,
        })
    }

    /// Effective number of tags to show for images of `entry`.
    ///
    /// The registry override wins over the global value; negative values
    /// clamp to zero.
    pub fn max_for(&self, entry: &RegistryEntry) -> usize {
        let max = entry.max.unwrap_or(self.max);
        usize::try_from(max).unwrap_or(0)
    }

    /// Total number of (registry, image) pairs.
    pub fn image_count(&self) -> usize {
        self.registries.iter().map(|r| r.images.len()).sum()
    }
}
