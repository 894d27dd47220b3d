//! Domain entity representing a user record.

use chrono::{DateTime, Utc};

/// A persisted user.
///
/// `id` is assigned by the database and never changes. `email` is unique across
/// all records; the storage layer enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: i64,
        name: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a user. Both fields are already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update of a user.
///
/// `None` leaves the field unchanged. Applying a patch always refreshes
/// `updated_at`, even when every field is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}
