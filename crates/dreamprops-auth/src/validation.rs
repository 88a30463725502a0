//! Field checks for the sign-in, sign-up, and newsletter forms.
//!
//! Each check returns the first violated rule's message; nothing is
//! persisted before a check passes.

use crate::errors::AuthError;

/// Minimum password length (in characters).
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign-up form contents.
#[derive(Clone, Debug, Default)]
pub struct SignUpForm {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
    /// Whether the terms checkbox was ticked.
    pub terms_accepted: bool,
}

/// Sign-in requires a non-empty email and a password of at least
/// [`MIN_PASSWORD_LEN`] characters.
pub fn check_sign_in(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(
            "Please enter a valid email and password (minimum 6 characters).".to_string(),
        ));
    }
    Ok(())
}

/// Sign-up rules, checked in order: all fields present, passwords match,
/// password length, terms accepted.
pub fn check_sign_up(form: &SignUpForm) -> Result<(), AuthError> {
    let required = [
        &form.name,
        &form.email,
        &form.password,
        &form.confirm_password,
    ];
    if required.iter().any(|f| f.is_empty()) {
        return Err(AuthError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }
    if form.password != form.confirm_password {
        return Err(AuthError::Validation("Passwords do not match.".to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(
            "Password must be at least 6 characters long.".to_string(),
        ));
    }
    if !form.terms_accepted {
        return Err(AuthError::Validation(
            "Please accept the Terms & Conditions.".to_string(),
        ));
    }
    Ok(())
}

/// Newsletter sign-up requires something that looks like an email.
pub fn check_newsletter(email: &str) -> Result<(), AuthError> {
    if email.is_empty() || !email.contains('@') {
        return Err(AuthError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn form() -> SignUpForm {
        SignUpForm {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            terms_accepted: true,
        }
    }

    fn message(result: Result<(), AuthError>) -> String {
        match result {
            Err(AuthError::Validation(m)) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn sign_in_accepts_six_chars() {
        assert!(check_sign_in("ann@x.com", "123456").is_ok());
    }

    #[test]
    fn sign_in_rejects_short_password_and_blank_email() {
        assert_matches!(check_sign_in("ann@x.com", "12345"), Err(AuthError::Validation(_)));
        assert_matches!(check_sign_in("", "123456"), Err(AuthError::Validation(_)));
    }

    #[test]
    fn sign_in_only_requires_nonempty_email() {
        assert!(check_sign_in("   ", "secret1").is_ok());
    }

    #[test]
    fn sign_up_accepts_whitespace_passwords() {
        let f = SignUpForm {
            password: "      ".to_string(),
            confirm_password: "      ".to_string(),
            ..form()
        };
        assert!(check_sign_up(&f).is_ok());
    }

    #[test]
    fn sign_up_valid_form() {
        assert!(check_sign_up(&form()).is_ok());
    }

    #[test]
    fn sign_up_missing_field_first() {
        let f = SignUpForm {
            name: String::new(),
            confirm_password: "other".to_string(),
            terms_accepted: false,
            ..form()
        };
        assert_eq!(message(check_sign_up(&f)), "Please fill in all required fields.");
    }

    #[test]
    fn sign_up_mismatch_before_length() {
        let f = SignUpForm {
            password: "abc".to_string(),
            confirm_password: "abd".to_string(),
            ..form()
        };
        assert_eq!(message(check_sign_up(&f)), "Passwords do not match.");
    }

    #[test]
    fn sign_up_short_password() {
        let f = SignUpForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..form()
        };
        assert_eq!(
            message(check_sign_up(&f)),
            "Password must be at least 6 characters long."
        );
    }

    #[test]
    fn sign_up_terms_last() {
        let f = SignUpForm {
            terms_accepted: false,
            ..form()
        };
        assert_eq!(
            message(check_sign_up(&f)),
            "Please accept the Terms & Conditions."
        );
    }

    #[test]
    fn newsletter_requires_at_sign() {
        assert!(check_newsletter("a@b").is_ok());
        assert_matches!(check_newsletter("ab"), Err(AuthError::Validation(_)));
        assert_matches!(check_newsletter(""), Err(AuthError::Validation(_)));
    }
}
