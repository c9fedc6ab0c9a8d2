//! Sign-in / sign-up form validation.
//!
//! Validation is field-level: every failing field is reported at once so the
//! form can flag all of them in a single pass.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use smartstock_core::{DomainError, DomainResult};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Password,
    Confirm,
    Terms,
}

impl FormField {
    pub fn message(&self) -> &'static str {
        match self {
            FormField::Name => "Please enter your name.",
            FormField::Email => "Enter a valid email.",
            FormField::Password => "Password must be at least 6 characters.",
            FormField::Confirm => "Passwords do not match.",
            FormField::Terms => "You must accept the terms to continue.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl From<FormField> for FieldError {
    fn from(field: FormField) -> Self {
        Self {
            field,
            message: field.message().to_string(),
        }
    }
}

/// All field errors from one validation pass (never empty).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} form field(s) failed validation", .0.len())]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    fn check(failed: Vec<FormField>) -> Result<(), FormErrors> {
        if failed.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(failed.into_iter().map(FieldError::from).collect()))
        }
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.0.iter().map(|e| e.field).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut failed = Vec::new();
        if !is_valid_email(&self.email) {
            failed.push(FormField::Email);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            failed.push(FormField::Password);
        }
        FormErrors::check(failed)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm: String,
    #[serde(default)]
    pub accepted_terms: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut failed = Vec::new();
        if self.display_name().is_none() {
            failed.push(FormField::Name);
        }
        if !is_valid_email(&self.email) {
            failed.push(FormField::Email);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            failed.push(FormField::Password);
        }
        if self.confirm != self.password {
            failed.push(FormField::Confirm);
        }
        if !self.accepted_terms {
            failed.push(FormField::Terms);
        }
        FormErrors::check(failed)
    }

    /// Trimmed name, if any.
    pub fn display_name(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|s| !s.is_empty())
    }
}

/// A password reset needs a plausible email first.
pub fn validate_reset_email(email: &str) -> DomainResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(DomainError::validation("Enter your email above first."))
    }
}
