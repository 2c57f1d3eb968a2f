//! Error types for cache-purge
//!
//! All modules use `PurgeResult<T>` as their return type.

use thiserror::Error;

/// Result type alias for cache-purge operations
pub type PurgeResult<T> = Result<T, PurgeError>;

/// All errors that can occur in cache-purge
#[derive(Error, Debug)]
pub enum PurgeError {
    // Input errors
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid repository '{0}', expected owner/name")]
    InvalidRepository(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // Per-entry errors, recovered as warnings
    #[error("Missing cache.id")]
    MissingIdentifier,

    #[error("Could not delete cache {id}: {reason}")]
    DeletionFailed { id: u64, reason: String },

    // API errors
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Run outcome
    #[error("Action failed due to warning(s).")]
    WarningEscalation,

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PurgeError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an API error from a response status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this failure was raised by warning escalation rather than an error
    pub fn is_escalation(&self) -> bool {
        matches!(self, Self::WarningEscalation)
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRepository(_) => Some("Set --repository or GITHUB_REPOSITORY to owner/name"),
            Self::Api { status: 401, .. } => Some("Check that the token is valid"),
            Self::Api { status: 403, .. } => {
                Some("The token needs the actions: write permission to delete caches")
            }
            _ => None,
        }
    }
}

impl From<ureq::Error> for PurgeError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => Self::api(status, "request failed"),
            other => Self::Http(other.to_string()),
        }
    }
}
