//! # Input Validation
//!
//! Email shape check applied before a record is created. The only way to
//! obtain a [`ValidatedStudent`] is through [`StudentInput::validate`], and
//! [`StudentStore::create`](super::StudentStore::create) accepts nothing else.
//!
//! Updates are not re-validated unless the server is configured to do so.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{StudentError, StudentResult};
use super::model::StudentInput;

/// `local@label.(label.)*tld`, ASCII word characters, hyphens and dots in the
/// local part, a 2 to 4 character top-level label.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Check an email address against the accepted shape
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Student input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedStudent(StudentInput);

impl ValidatedStudent {
    pub fn into_inner(self) -> StudentInput {
        self.0
    }
}

impl StudentInput {
    /// Validate the email field
    pub fn validate(self) -> StudentResult<ValidatedStudent> {
        if !is_valid_email(&self.email) {
            return Err(StudentError::InvalidEmail);
        }
        Ok(ValidatedStudent(self))
    }
}
