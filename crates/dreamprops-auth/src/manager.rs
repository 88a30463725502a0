//! Session lifecycle: restore, sign in, sign up, sign out.
//!
//! Persistence and the in-memory session change together: the stored form is
//! written (or removed) first and memory is updated only if that succeeded.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::errors::AuthError;
use crate::session::Session;
use crate::storage::LocalStorage;
use crate::validation::{SignUpForm, check_newsletter, check_sign_in, check_sign_up};

/// Owns the current session and its persisted form.
pub struct SessionManager {
    storage: Arc<dyn LocalStorage>,
    key: String,
    delay: Duration,
    current: Option<Session>,
}

impl SessionManager {
    /// Create a manager persisting under `key`, with `delay` of simulated
    /// latency on accepted requests.
    pub fn new(storage: Arc<dyn LocalStorage>, key: impl Into<String>, delay: Duration) -> Self {
        Self {
            storage,
            key: key.into(),
            delay,
            current: None,
        }
    }

    /// Rehydrate the session from storage.
    ///
    /// A stored form that does not parse is removed and treated as "no
    /// session". Storage read failures are logged and treated the same way.
    pub fn restore(&mut self) -> Option<&Session> {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, "failed to read persisted session: {e}");
                None
            }
        };

        self.current = raw.and_then(|text| match serde_json::from_str::<Session>(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(key = %self.key, "discarding corrupt persisted session: {e}");
                if let Err(e) = self.storage.remove(&self.key) {
                    warn!(key = %self.key, "failed to clear corrupt session: {e}");
                }
                None
            }
        });

        debug!(signed_in = self.current.is_some(), "session restored");
        self.current.as_ref()
    }

    /// Simulated sign-in.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        check_sign_in(email, password)?;
        self.simulate_latency().await;

        let session = Session::from_email(email);
        let stored = serde_json::to_string(&session)?;
        self.storage.set(&self.key, &stored)?;

        info!(email = %session.email, "signed in");
        Ok(&*self.current.insert(session))
    }

    /// Simulated registration. Never creates a session.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<(), AuthError> {
        check_sign_up(form)?;
        self.simulate_latency().await;
        info!(email = %form.email, "account created");
        Ok(())
    }

    /// Clear the session and its persisted form.
    pub fn sign_out(&mut self) -> Result<(), AuthError> {
        self.storage.remove(&self.key)?;
        if let Some(session) = self.current.take() {
            info!(email = %session.email, "signed out");
        }
        Ok(())
    }

    /// Simulated newsletter subscription.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), AuthError> {
        check_newsletter(email)?;
        self.simulate_latency().await;
        info!(email, "newsletter subscription accepted");
        Ok(())
    }

    /// The signed-in session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Whether a session is active.
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use assert_matches::assert_matches;

    const KEY: &str = "dreamproperties_user";

    fn manager(storage: &MemoryStorage) -> SessionManager {
        SessionManager::new(Arc::new(storage.clone()), KEY, Duration::ZERO)
    }

    #[tokio::test]
    async fn sign_in_sets_and_persists_session() {
        let storage = MemoryStorage::new();
        let mut sessions = manager(&storage);

        let session = sessions.sign_in("ann@x.com", "secret1").await.unwrap().clone();
        assert_eq!(session.email, "ann@x.com");
        assert_eq!(session.name, "Ann");
        assert!(session.uid.starts_with("mock-uid-"));
        assert_eq!(sessions.current_session(), Some(&session));
        assert!(storage.get(KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_sign_in_changes_nothing() {
        let storage = MemoryStorage::new();
        let mut sessions = manager(&storage);

        let err = sessions.sign_in("ann@x.com", "short").await.unwrap_err();
        assert_matches!(err, AuthError::Validation(_));
        assert!(sessions.current_session().is_none());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn sign_out_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let mut sessions = manager(&storage);
        let _ = sessions.sign_in("ann@x.com", "secret1").await.unwrap();

        sessions.sign_out().unwrap();
        assert!(sessions.current_session().is_none());
        assert!(storage.get(KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn sign_out_without_session_is_ok() {
        let storage = MemoryStorage::new();
        let mut sessions = manager(&storage);
        assert!(sessions.sign_out().is_ok());
    }

    #[tokio::test]
    async fn reload_restores_equal_session() {
        let dir = tempfile::TempDir::new().unwrap();
        let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::in_dir(dir.path()));

        let mut first = SessionManager::new(storage.clone(), KEY, Duration::ZERO);
        let original = first.sign_in("ann@x.com", "secret1").await.unwrap().clone();

        let mut reloaded = SessionManager::new(storage, KEY, Duration::ZERO);
        assert_eq!(reloaded.restore(), Some(&original));
    }

    #[test]
    fn restore_without_stored_form() {
        let storage = MemoryStorage::new();
        let mut sessions = manager(&storage);
        assert!(sessions.restore().is_none());
    }

    #[test]
    fn restore_discards_corrupt_form() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{not json").unwrap();
        storage.set("other", "kept").unwrap();

        let mut sessions = manager(&storage);
        assert!(sessions.restore().is_none());
        assert!(storage.get(KEY).unwrap().is_none());
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn sign_up_mismatch_fails_before_persistence() {
        let storage = MemoryStorage::new();
        let sessions = manager(&storage);
        let form = SignUpForm {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
            terms_accepted: true,
        };

        let err = sessions.sign_up(&form).await.unwrap_err();
        assert_matches!(err, AuthError::Validation(ref m) if m == "Passwords do not match.");
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn sign_up_success_creates_no_session() {
        let storage = MemoryStorage::new();
        let sessions = manager(&storage);
        let form = SignUpForm {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            terms_accepted: true,
        };

        sessions.sign_up(&form).await.unwrap();
        assert!(!sessions.is_signed_in());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn newsletter_validation() {
        let storage = MemoryStorage::new();
        let sessions = manager(&storage);
        assert!(sessions.subscribe_newsletter("a@b.c").await.is_ok());
        assert_matches!(
            sessions.subscribe_newsletter("nope").await,
            Err(AuthError::Validation(_))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_sign_in_waits_for_simulated_latency() {
        let storage = MemoryStorage::new();
        let mut sessions =
            SessionManager::new(Arc::new(storage.clone()), KEY, Duration::from_millis(1000));

        let started = tokio::time::Instant::now();
        let _ = sessions.sign_in("ann@x.com", "secret1").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_sign_in_returns_immediately() {
        let storage = MemoryStorage::new();
        let mut sessions =
            SessionManager::new(Arc::new(storage.clone()), KEY, Duration::from_millis(1000));

        let started = tokio::time::Instant::now();
        assert!(sessions.sign_in("", "secret1").await.is_err());
        assert!(started.elapsed() < Duration::from_millis(1000));
    }
}
