//! Listing load errors.

use dreamprops_core::AppError;

/// Message shown in the loading banner for every load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load properties. Please try again later.";

/// Errors that can occur while fetching the property collection.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a JSON array of property records.
    #[error("malformed property payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LoadError {
    /// Human-readable message for the banner.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        Self::NetworkLoad {
            message: err.user_message().to_string(),
            detail: err.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
