//! Field validation rules shared by the auth forms and the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in and sign-up forms call these before any network request. The
//! server links the same password requirement check so both sides agree on
//! what a valid password is.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Loose email shape check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate an email field, returning the message to display on failure.
#[must_use]
pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Invalid email address")
    } else {
        None
    }
}

/// Per-rule password check results, rendered as a checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
    /// Confirmation is non-empty and byte-equal to the password.
    pub matches: bool,
}

impl PasswordChecks {
    #[must_use]
    pub fn evaluate(password: &str, confirm: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(char::is_uppercase),
            lowercase: password.chars().any(char::is_lowercase),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
            matches: !confirm.is_empty() && password == confirm,
        }
    }

    /// True when the password alone satisfies every requirement.
    ///
    /// Confirmation matching is reported separately and is not part of this.
    #[must_use]
    pub fn meets_requirements(&self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit && self.special
    }

    /// Checklist rows as `(label, satisfied)` in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, bool); 6] {
        [
            ("At least 8 characters", self.min_length),
            ("One uppercase letter", self.uppercase),
            ("One lowercase letter", self.lowercase),
            ("One number", self.digit),
            ("One special character", self.special),
            ("Passwords match", self.matches),
        ]
    }
}

/// Requirement check on its own, used where there is no confirmation field.
#[must_use]
pub fn password_meets_requirements(password: &str) -> bool {
    PasswordChecks::evaluate(password, "").meets_requirements()
}
