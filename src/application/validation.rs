//! Request validation for user mutations.
//!
//! Pure checks with no side effects: presence of required fields on create and
//! field format on both create and update.

use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{NewUser, UserPatch};
use crate::error::AppError;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const REQUIRED_FIELDS: &str = "Name and email are required";

/// Unvalidated user fields as received from a client.
///
/// Absent fields are not checked by [`Validate`]; presence is only required by
/// [`UserDraft::into_new_user`].
#[derive(Debug, Clone, Default, Validate)]
pub struct UserDraft {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,

    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        regex(path = *EMAIL_PATTERN, message = "Invalid email format")
    )]
    pub email: Option<String>,
}

impl UserDraft {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    /// Validates the draft as a create request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `name` or `email` is missing or empty,
    /// or if a field is malformed.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {}
            _ => return Err(AppError::bad_request(REQUIRED_FIELDS)),
        }

        self.validate()?;

        Ok(NewUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        })
    }

    /// Validates the draft as a partial update. Absent fields stay unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a supplied field is malformed.
    pub fn into_patch(self) -> Result<UserPatch, AppError> {
        self.validate()?;

        Ok(UserPatch {
            name: self.name,
            email: self.email,
        })
    }
}
