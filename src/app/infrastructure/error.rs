use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while writing a journal page to disk.
///
/// Every variant displays as the same headline; the variant-specific text
/// lives in [`SaveError::detail`].
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to save")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SaveError {
    /// Technical explanation shown under the headline.
    pub fn detail(&self) -> String {
        match self {
            Self::CreateDirectory { source, .. } => {
                format!("Unable to create directory: {}", source)
            }
            Self::CreateFile { source, .. } => source.to_string(),
            Self::Write { source, .. } => format!("Unable to write file: {}", source),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::CreateFile { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// Failure while loading or storing the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Saving configuration")]
    CreateDirectory(#[source] io::Error),

    #[error("Saving configuration")]
    Serialize(#[source] serde_json::Error),

    #[error("Saving configuration")]
    Write(#[source] io::Error),

    #[error("Loading configuration")]
    Read(#[source] io::Error),

    #[error("Loading configuration")]
    Parse(#[source] serde_json::Error),
}

impl ConfigError {
    pub fn detail(&self) -> String {
        match self {
            Self::CreateDirectory(e) => format!("Creating directory: {}", e),
            Self::Serialize(e) => format!("Serializing settings: {}", e),
            Self::Write(e) => format!("Writing file: {}", e),
            Self::Read(e) => format!("Reading file: {}", e),
            Self::Parse(e) => format!("Parsing settings: {}", e),
        }
    }
}

/// A headline plus optional diagnostic text, ready to be shown to the user.
///
/// This is the shape error sinks and the UI message channel carry, so it is
/// cheap to clone and free of `io::Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedError {
    pub summary: String,
    pub detail: Option<String>,
}

impl DetailedError {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.detail = if detail.is_empty() { None } else { Some(detail) };
        self
    }
}

impl std::fmt::Display for DetailedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary)
    }
}

impl From<&SaveError> for DetailedError {
    fn from(err: &SaveError) -> Self {
        DetailedError::new(err.to_string()).with_detail(err.detail())
    }
}

impl From<&ConfigError> for DetailedError {
    fn from(err: &ConfigError) -> Self {
        DetailedError::new(err.to_string()).with_detail(err.detail())
    }
}

/// Convenience type alias for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
