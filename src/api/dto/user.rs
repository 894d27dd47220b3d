//! DTOs for user management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::validation::UserDraft;
use crate::domain::entities::User;

/// Request body for `POST /api/users`.
///
/// Fields are optional at the serde level so that a missing field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Request body for `PUT /api/users/{id}`.
///
/// Only provided fields are changed.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(r: CreateUserRequest) -> Self {
        UserDraft::new(r.name, r.email)
    }
}

impl From<UpdateUserRequest> for UserDraft {
    fn from(r: UpdateUserRequest) -> Self {
        UserDraft::new(r.name, r.email)
    }
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Payload returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeletedUser {
    pub id: i64,
}
