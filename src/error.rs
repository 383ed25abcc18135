use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for gtauto operations
#[derive(Error, Debug)]
pub enum GtautoError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version identifier: {0}")]
    InvalidVersion(String),

    #[error("Version {0} not found in changelog")]
    SectionNotFound(String),

    #[error("Cannot read changelog '{}': {}", .path.display(), .source)]
    ChangelogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gtauto
pub type Result<T> = std::result::Result<T, GtautoError>;

impl GtautoError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GtautoError::Config(msg.into())
    }

    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        GtautoError::InvalidVersion(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GtautoError::Tag(msg.into())
    }

    /// Create a changelog read error for `path`
    pub fn changelog_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GtautoError::ChangelogRead {
            path: path.into(),
            source,
        }
    }

    /// True when the changelog was read but holds no section for the version.
    ///
    /// This is the only failure the tag workflow recovers from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GtautoError::SectionNotFound(_))
    }
}

impl From<toml::de::Error> for GtautoError {
    fn from(err: toml::de::Error) -> Self {
        GtautoError::Config(err.to_string())
    }
}
