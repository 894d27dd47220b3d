//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// Constraint violations surface as [`AppError::Storage`] so that the error
/// classifier can map them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users, newest first (`created_at DESC`, ties by `id DESC`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Storage`] on database errors.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Inserts a user with both timestamps set to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] with [`crate::error::StorageFault::UniqueViolation`]
    /// if the email is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// Returns `Ok(None)` if no user has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the new email is already taken.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError>;

    /// Deletes a user.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Storage`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
