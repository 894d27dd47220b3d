//! User management service.

use std::sync::Arc;

use crate::application::validation::UserDraft;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for listing, reading and mutating users.
///
/// Validates input before any write and turns missing records into
/// [`AppError::NotFound`]. Storage errors are propagated unchanged.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists all users, newest first.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is missing or malformed.
    /// Returns [`AppError::Storage`] if the email is already taken.
    pub async fn create_user(&self, draft: UserDraft) -> Result<User, AppError> {
        let new_user = draft.into_new_user()?;

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Partially updates a user.
    ///
    /// `draft` is only evaluated once the user is known to exist, so an unknown
    /// id is reported as not found whatever the payload holds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Validation`] if the payload cannot be read or a
    /// supplied field is malformed.
    /// Returns [`AppError::Storage`] if the new email is already taken.
    pub async fn update_user<F>(&self, id: i64, draft: F) -> Result<User, AppError>
    where
        F: FnOnce() -> Result<UserDraft, AppError>,
    {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(user_not_found());
        }

        let patch = draft()?.into_patch()?;

        let user = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(user_not_found)?;
        tracing::info!(user_id = user.id, "User updated");

        Ok(user)
    }

    /// Deletes a user and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<i64, AppError> {
        if !self.repository.delete(id).await? {
            return Err(user_not_found());
        }
        tracing::info!(user_id = id, "User deleted");

        Ok(id)
    }
}

fn user_not_found() -> AppError {
    AppError::not_found("User not found")
}
