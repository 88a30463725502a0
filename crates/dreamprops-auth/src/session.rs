//! Simulated signed-in identity.

use serde::{Deserialize, Serialize};

/// Prefix of generated session identifiers.
const UID_PREFIX: &str = "mock-uid-";

/// A signed-in identity. No credential ever backs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Email the user signed in with.
    pub email: String,
    /// Display name derived from the email.
    pub name: String,
    /// Opaque session identifier.
    pub uid: String,
}

impl Session {
    /// Build a session for `email`, stamped with the current time.
    pub fn from_email(email: &str) -> Self {
        Self::from_email_at(email, chrono::Utc::now().timestamp_millis())
    }

    /// Build a session for `email` with an explicit timestamp (ms).
    pub fn from_email_at(email: &str, now_ms: i64) -> Self {
        Self {
            email: email.to_string(),
            name: display_name(email),
            uid: format!("{UID_PREFIX}{now_ms}"),
        }
    }
}

/// Local part of the email with its first character upper-cased.
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_local_part() {
        assert_eq!(display_name("ann@x.com"), "Ann");
        assert_eq!(display_name("bob.smith@example.org"), "Bob.smith");
        assert_eq!(display_name("noatsign"), "Noatsign");
        assert_eq!(display_name("@x.com"), "");
    }

    #[test]
    fn display_name_handles_multibyte_first_char() {
        assert_eq!(display_name("élodie@x.fr"), "Élodie");
    }

    #[test]
    fn uid_carries_timestamp() {
        let s = Session::from_email_at("ann@x.com", 1_700_000_000_000);
        assert_eq!(s.uid, "mock-uid-1700000000000");
        assert_eq!(s.email, "ann@x.com");
    }

    #[test]
    fn stored_form_is_flat_json() {
        let s = Session::from_email_at("ann@x.com", 1);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "ann@x.com", "name": "Ann", "uid": "mock-uid-1"})
        );
    }

    #[test]
    fn missing_field_fails_to_parse() {
        assert!(serde_json::from_str::<Session>(r#"{"email":"a@b.c"}"#).is_err());
    }
}
