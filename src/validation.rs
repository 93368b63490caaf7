//! Field predicates and validation errors
//!
//! The three checks are total over all strings and never fail; a failing
//! check is reported as a [`ValidationError`] value, not as a fault.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum number of characters in an accepted password
pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters long";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// `local@domain.tld` with no whitespace and exactly one `@`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// A validation failure shown inline under a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmailFormat,
    #[error("{}", PASSWORD_TOO_SHORT_MESSAGE)]
    PasswordTooShort,
    #[error("{}", PASSWORD_MISMATCH_MESSAGE)]
    PasswordMismatch,
}

impl ValidationError {
    /// User-facing message for this error
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidEmailFormat => INVALID_EMAIL_MESSAGE,
            Self::PasswordTooShort => PASSWORD_TOO_SHORT_MESSAGE,
            Self::PasswordMismatch => PASSWORD_MISMATCH_MESSAGE,
        }
    }
}

/// Minimal structural email check. Not RFC 5322.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Passwords are accepted on length alone
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LEN
}

/// A blank confirmation never matches, even a blank password.
pub fn is_confirm_match(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && confirm == password
}

pub fn validate_email(s: &str) -> Result<(), ValidationError> {
    if is_valid_email(s) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmailFormat)
    }
}

pub fn validate_password(s: &str) -> Result<(), ValidationError> {
    if is_valid_password(s) {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort)
    }
}

pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if is_confirm_match(password, confirm) {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}
