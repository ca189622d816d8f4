//! Custom error types for the user-management library

use thiserror::Error;
use uuid::Uuid;

use crate::password::HashError;

/// Custom error type for user-management operations
#[derive(Error, Debug)]
pub enum UserError {
    /// Username is already in use by a stored user
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// No user with the given ID
    #[error("User not found: {0}")]
    NotFound(Uuid),

    /// Password hashing failure
    #[error(transparent)]
    PasswordHash(#[from] HashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),
}

/// Type alias for user-management results
pub type UserResult<T> = Result<T, UserError>;
