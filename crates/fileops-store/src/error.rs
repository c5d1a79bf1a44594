//! Error types for fileops-store

use std::path::PathBuf;

/// Result type for fileops-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fileops-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File '{path}' already exists")]
    AlreadyExists { path: PathBuf },

    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}: {source}")]
    LockFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Short human-readable cause, used as the `Reason:` of a status line.
    pub fn reason(&self) -> String {
        match self {
            Self::Io { source, .. } | Self::LockFailed { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}
