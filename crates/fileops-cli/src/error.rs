//! Error types for fileops-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the CLI around a store operation.
///
/// A failed store operation is an outcome, not a `CliError`: the store has
/// already reported it.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from fileops-store
    #[error(transparent)]
    Store(#[from] fileops_store::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
