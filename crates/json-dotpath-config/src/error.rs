//! Error types for the configuration store.

use std::path::PathBuf;

use json_dotpath::DotPathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON after comment stripping.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Path(#[from] DotPathError),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when a required path was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Path(DotPathError::NotFound(_)))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
