//! Error types for Tagfetch
//!
//! Fatal errors (missing tool, unusable configuration) abort a run before any
//! registry is contacted. Fetch errors are reported per image and never stop
//! the remaining images from being processed.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for Tagfetch operations
#[derive(Error, Debug)]
pub enum TagFetchError {
    /// The external registry tool could not be found on `PATH`
    #[error("{tool} is not installed. Please install {tool} to use this script.")]
    ToolNotFound {
        tool: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configuration file does not exist
    #[error("{path} file not found.")]
    ConfigNotFound { path: String },

    /// The configuration file exists but cannot be used
    #[error("Error parsing YAML file: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An exclude pattern is not a valid regular expression
    #[error("Invalid exclude pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Listing the tags of one image failed
    ///
    /// The message is the tool's error output when it exited unsuccessfully,
    /// or a description of why it could not be run or understood.
    #[error("{message}")]
    Fetch {
        message: String,
        status: Option<i32>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing the report failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Tagfetch operations
pub type Result<T> = std::result::Result<T, TagFetchError>;

impl TagFetchError {
    /// Creates a new tool-not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagfetch::error::TagFetchError;
    ///
    /// let err = TagFetchError::tool_not_found("Skopeo");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Skopeo is not installed. Please install Skopeo to use this script."
    /// );
    /// ```
    pub fn tool_not_found<S: Into<String>>(tool: S) -> Self {
        Self::ToolNotFound {
            tool: tool.into(),
            source: None,
        }
    }

    /// Creates a new tool-not-found error with a source error.
    pub fn tool_not_found_with_source<S, E>(tool: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ToolNotFound {
            tool: tool.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new config-not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagfetch::error::TagFetchError;
    ///
    /// let err = TagFetchError::config_not_found("config.yaml");
    /// assert_eq!(err.to_string(), "config.yaml file not found.");
    /// ```
    pub fn config_not_found<S: Into<String>>(path: S) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagfetch::error::TagFetchError;
    ///
    /// let err = TagFetchError::config("missing field `registries`", Some("config.yaml"));
    /// assert!(matches!(err, TagFetchError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new pattern error.
    pub fn pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates a new fetch error from the tool's exit status and error output.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagfetch::error::TagFetchError;
    ///
    /// let err = TagFetchError::fetch("manifest unknown", Some(1));
    /// assert_eq!(err.to_string(), "manifest unknown");
    /// ```
    pub fn fetch<S: Into<String>>(message: S, status: Option<i32>) -> Self {
        Self::Fetch {
            message: message.into(),
            status,
            source: None,
        }
    }

    /// Creates a new fetch error with a source error.
    pub fn fetch_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Fetch {
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new I/O error.
    pub fn io<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Returns true if the error only concerns a single image.
    ///
    /// Everything else prevents the run from starting.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Returns true if the report could not be written because the reader
    /// went away, e.g. `tagfetch | head -1`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
