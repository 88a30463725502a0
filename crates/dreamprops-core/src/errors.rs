//! Error taxonomy for DreamProps.
//!
//! Every crate has its own `thiserror` enum; all of them convert into
//! [`AppError`], which the application layer turns into a [`Notice`] for the
//! notification dialog. Two variants are deliberately silent:
//! [`AppError::CorruptSession`] and [`AppError::NavigationMiss`] never reach
//! the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level application error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Fetching or parsing the property collection failed.
    #[error("{message}")]
    NetworkLoad {
        /// Human-readable message for the banner.
        message: String,
        /// Diagnostic detail (status code, parse error) for logs.
        detail: String,
    },

    /// A sign-in, sign-up, or newsletter field check failed.
    #[error("{0}")]
    Validation(String),

    /// The persisted session could not be parsed and was discarded.
    #[error("corrupt persisted session: {0}")]
    CorruptSession(String),

    /// The fragment named no declared page.
    #[error("unknown route: {0}")]
    NavigationMiss(String),

    /// Local storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Whether this error is shown to the user.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::CorruptSession(_) | Self::NavigationMiss(_))
    }

    /// Notification for user-facing errors, `None` for silent ones.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::NetworkLoad { message, .. } | Self::Validation(message) => {
                Some(Notice::error(message.clone()))
            }
            Self::Storage(_) => Some(Notice::error(
                "Something went wrong saving your session. Please try again.",
            )),
            Self::CorruptSession(_) | Self::NavigationMiss(_) => None,
        }
    }
}

/// A title + message pair for the notification dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
}

impl Notice {
    /// Build a notice with an arbitrary title.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// `Success` notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message)
    }

    /// `Error` notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
