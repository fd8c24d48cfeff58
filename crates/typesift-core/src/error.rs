use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving [`ParserOptions`](crate::ParserOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access options file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for options loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
