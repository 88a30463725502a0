//! # dreamprops-auth
//!
//! Mock authentication for the listing browser.
//!
//! Credentials are never verified against any authority: a sign-in that
//! passes the field checks simply creates a [`Session`] from the email. The
//! session is persisted to [`LocalStorage`] under a single key and rehydrated
//! on the next start; a corrupt stored form is discarded silently.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use dreamprops_auth::{FileStorage, SessionManager};
//!
//! # async fn demo() -> Result<(), dreamprops_auth::AuthError> {
//! let storage = Arc::new(FileStorage::in_dir("/home/user/.dreamprops"));
//! let mut sessions = SessionManager::new(storage, "dreamproperties_user", Duration::ZERO);
//! let _ = sessions.restore();
//! let session = sessions.sign_in("ann@example.com", "secret1").await?;
//! assert_eq!(session.name, "Ann");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod manager;
pub mod session;
pub mod storage;
pub mod validation;

pub use errors::AuthError;
pub use manager::SessionManager;
pub use session::Session;
pub use storage::{FileStorage, LocalStorage, MemoryStorage, storage_file_path};
pub use validation::SignUpForm;
