//! Auth error types.

use dreamprops_core::AppError;

/// Errors that can occur during sign-in, sign-up, or session persistence.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A field check failed; the message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(message) => Self::Validation(message),
            other => Self::Storage(other.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
