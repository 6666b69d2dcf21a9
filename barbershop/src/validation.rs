//! Client-side form validation.
//!
//! DESIGN
//! ======
//! Every rule runs (no early abort) and each field keeps its first failing
//! message, so forms can show all inline errors after one submit. A valid form
//! converts straight into the request body it guards.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{
    Credentials, ForgotPasswordRequest, PasswordChange, ProfileUpdate, ResetPasswordRequest, SignUpRequest,
};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Type a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Minimum 6 characters";
pub const NAME_REQUIRED: &str = "Name is required";
pub const FIELD_REQUIRED: &str = "Field is required";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";
pub const NEW_PASSWORDS_MUST_MATCH: &str = "New passwords must match";

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Field name → message for every invalid field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already failed.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.add("email", EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.add("email", EMAIL_INVALID);
    }
}

fn check_required(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) {
    if value.is_empty() {
        errors.add(field, message);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let email = self.email.trim();
        let mut errors = FieldErrors::new();
        check_email(&mut errors, email);
        check_required(&mut errors, "password", &self.password, PASSWORD_REQUIRED);
        errors.into_result(Credentials { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<SignUpRequest, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", name, NAME_REQUIRED);
        check_email(&mut errors, email);
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", PASSWORD_TOO_SHORT);
        }
        errors.into_result(SignUpRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<ForgotPasswordRequest, FieldErrors> {
        let email = self.email.trim();
        let mut errors = FieldErrors::new();
        check_email(&mut errors, email);
        errors.into_result(ForgotPasswordRequest { email: email.to_owned() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub password_confirmation: String,
}

impl ResetPasswordForm {
    /// Validate and attach the reset `token` taken from the link.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self, token: &str) -> Result<ResetPasswordRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "password", &self.password, PASSWORD_REQUIRED);
        if self.password_confirmation != self.password {
            errors.add("password_confirmation", PASSWORDS_MUST_MATCH);
        }
        errors.into_result(ResetPasswordRequest {
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            token: token.to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ProfileForm {
    /// New passwords are only required (and only sent) once the current
    /// password is filled in.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let changing_password = !self.old_password.is_empty();

        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", name, NAME_REQUIRED);
        check_email(&mut errors, email);
        if changing_password {
            check_required(&mut errors, "password", &self.password, FIELD_REQUIRED);
            check_required(&mut errors, "password_confirmation", &self.password_confirmation, FIELD_REQUIRED);
        }
        if self.password_confirmation != self.password {
            errors.add("password_confirmation", NEW_PASSWORDS_MUST_MATCH);
        }

        let password = changing_password.then(|| PasswordChange {
            old_password: self.old_password.clone(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        });
        errors.into_result(ProfileUpdate { name: name.to_owned(), email: email.to_owned(), password })
    }
}
