//! User repositories
//!
//! The persistence contract consumed by the service, along with the
//! PostgreSQL and in-memory adapters implementing it.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use common::error::DatabaseError;
use uuid::Uuid;

use crate::models::{NewUser, User};

pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;

/// Persistence contract consumed by [`UserService`](crate::service::UserService)
///
/// Lookups report absence as `Ok(None)`; an error always means the
/// repository itself failed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    /// List all users in repository-defined order
    async fn find_all(&self) -> Result<Vec<User>, DatabaseError>;

    /// Insert a new user, assigning its identity and timestamps
    async fn insert(&self, user: &NewUser) -> Result<User, DatabaseError>;

    /// Update an existing user in place, keyed by its ID
    async fn update(&self, user: &User) -> Result<User, DatabaseError>;

    /// Delete a user by ID
    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError>;
}
