//! User-management service
//!
//! Orchestrates CRUD operations over the injected repository and password
//! hasher collaborators, enforcing username uniqueness on create and
//! existence on update and delete.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::password::PasswordHasher;
use crate::repositories::UserRepository;

/// Service for managing user operations
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service over the given collaborators
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user with a hashed password
    ///
    /// Fails with [`UserError::UsernameTaken`] if the username is already in
    /// use; nothing is written in that case. The uniqueness check and the
    /// insert are not atomic, so concurrent creates may still race.
    pub async fn create_user(&self, mut candidate: NewUser) -> UserResult<User> {
        info!("Creating new user: {}", candidate.username);

        if self
            .repository
            .find_by_username(&candidate.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken(candidate.username));
        }

        candidate.password = self.hasher.encode(&candidate.password)?;

        Ok(self.repository.insert(&candidate).await?)
    }

    /// Get all users in repository-defined order
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        Ok(self.repository.find_all().await?)
    }

    /// Find a user by ID
    ///
    /// A missing id is a normal outcome and returns `Ok(None)`.
    pub async fn get_user_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Update an existing user
    ///
    /// Email and full name are always overwritten from the patch. The
    /// password is overwritten, hashed first, only when the patch carries a
    /// non-empty one. Username and identity never change.
    pub async fn update_user(&self, id: Uuid, update: UpdateUser) -> UserResult<User> {
        info!("Updating user: {}", id);

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.email = update.email;
        user.full_name = update.full_name;

        if let Some(password) = update.password.as_deref().filter(|p| !p.is_empty()) {
            user.password_hash = self.hasher.encode(password)?;
        }

        Ok(self.repository.update(&user).await?)
    }

    /// Delete a user by ID
    ///
    /// Fails with [`UserError::NotFound`] if no such user is stored.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        info!("Deleting user: {}", id);

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        self.repository.delete(user.id).await?;

        Ok(())
    }
}
