//! Form models for the auth screens and the account page.
//!
//! Field errors are computed on submit and only shown once a submit was
//! attempted. Editing a field clears that field's error.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Credentials, PasswordChange, ProfileUpdate, Registration};
use crate::util::validation::{PasswordChecks, email_error, password_meets_requirements};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    CurrentPassword,
}

/// Validation message per field, `None` when the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub current_password: Option<&'static str>,
}

impl FieldErrors {
    fn slot_mut(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::CurrentPassword => &mut self.current_password,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
            Field::CurrentPassword => self.current_password,
        }
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.current_password.is_none()
    }
}

// =============================================================================
// SIGN IN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub tried_submit: bool,
}

impl SignInForm {
    /// Update a field and clear its error. Fields the form lacks are ignored.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Name | Field::ConfirmPassword | Field::CurrentPassword => return,
        }
        self.errors.clear(field);
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            email: email_error(&self.email),
            password: self.password.is_empty().then_some("Password is required"),
            ..FieldErrors::default()
        }
    }

    /// Record a submit attempt; return the payload only when every field is valid.
    pub fn submit(&mut self) -> Option<Credentials> {
        self.tried_submit = true;
        self.errors = self.validate();
        self.errors.is_empty().then(|| Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    /// Error text to render under `field`; empty before the first submit.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> String {
        visible(self.tried_submit, &self.errors, field)
    }
}

// =============================================================================
// SIGN UP
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: FieldErrors,
    pub tried_submit: bool,
}

impl SignUpForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::CurrentPassword => return,
        }
        self.errors.clear(field);
    }

    #[must_use]
    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks::evaluate(&self.password, &self.confirm_password)
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: email_error(&self.email),
            password: new_password_error(&self.password),
            confirm_password: confirmation_error(&self.password, &self.confirm_password),
            ..FieldErrors::default()
        }
    }

    /// Record a submit attempt; the payload drops the confirmation field.
    pub fn submit(&mut self) -> Option<Registration> {
        self.tried_submit = true;
        self.errors = self.validate();
        self.errors.is_empty().then(|| Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Submit stays disabled until every field has some content.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.name.trim().is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
    }

    /// The requirements checklist appears once typing starts or after a submit.
    #[must_use]
    pub fn show_requirements(&self) -> bool {
        !self.password.is_empty() || self.tried_submit
    }

    #[must_use]
    pub fn visible_error(&self, field: Field) -> String {
        visible(self.tried_submit, &self.errors, field)
    }
}

// =============================================================================
// ACCOUNT: PROFILE
// =============================================================================

/// Profile edit form. Blank fields mean "leave unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub errors: FieldErrors,
    pub tried_submit: bool,
}

impl ProfileForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password | Field::ConfirmPassword | Field::CurrentPassword => return,
        }
        self.errors.clear(field);
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let nothing = self.name.trim().is_empty() && self.email.trim().is_empty();
        FieldErrors {
            name: nothing.then_some("Enter a new name or email"),
            email: if self.email.trim().is_empty() { None } else { email_error(self.email.trim()) },
            ..FieldErrors::default()
        }
    }

    /// Record a submit attempt; the payload carries only the filled fields.
    pub fn submit(&mut self) -> Option<ProfileUpdate> {
        self.tried_submit = true;
        self.errors = self.validate();
        let filled = |value: &str| Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_owned);
        self.errors.is_empty().then(|| ProfileUpdate { name: filled(&self.name), email: filled(&self.email) })
    }

    /// Clear the inputs after the server accepted the update.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn visible_error(&self, field: Field) -> String {
        visible(self.tried_submit, &self.errors, field)
    }
}

// =============================================================================
// ACCOUNT: PASSWORD
// =============================================================================

/// Password change form. `password` holds the new password.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: FieldErrors,
    pub tried_submit: bool,
}

impl PasswordChangeForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::CurrentPassword => self.current_password = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Name | Field::Email => return,
        }
        self.errors.clear(field);
    }

    #[must_use]
    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks::evaluate(&self.password, &self.confirm_password)
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let password = new_password_error(&self.password).or_else(|| {
            (self.password == self.current_password).then_some("New password must differ from the current one")
        });
        FieldErrors {
            current_password: self.current_password.is_empty().then_some("Current password is required"),
            password,
            confirm_password: confirmation_error(&self.password, &self.confirm_password),
            ..FieldErrors::default()
        }
    }

    pub fn submit(&mut self) -> Option<PasswordChange> {
        self.tried_submit = true;
        self.errors = self.validate();
        self.errors.is_empty().then(|| PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.password.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.current_password.is_empty() || self.password.is_empty() || self.confirm_password.is_empty()
    }

    #[must_use]
    pub fn show_requirements(&self) -> bool {
        !self.password.is_empty() || self.tried_submit
    }

    #[must_use]
    pub fn visible_error(&self, field: Field) -> String {
        visible(self.tried_submit, &self.errors, field)
    }
}

fn new_password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if !password_meets_requirements(password) {
        Some("Password does not meet requirements")
    } else {
        None
    }
}

fn confirmation_error(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some("Please confirm your password")
    } else if password != confirmation {
        Some("Passwords do not match")
    } else {
        None
    }
}

fn visible(tried_submit: bool, errors: &FieldErrors, field: Field) -> String {
    if !tried_submit {
        return String::new();
    }
    errors.get(field).unwrap_or_default().to_owned()
}
