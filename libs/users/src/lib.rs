//! User-management service library
//!
//! This crate provides CRUD operations on user records through
//! [`UserService`], which delegates persistence to an injected
//! [`UserRepository`] and password hashing to an injected [`PasswordHasher`].
//! PostgreSQL and in-memory repository adapters and an Argon2 hasher adapter
//! ship alongside the service. Any HTTP or API surface is expected to be
//! layered on top by a consuming crate.

pub mod error;
pub mod models;
pub mod password;
pub mod repositories;
pub mod service;

pub use error::{UserError, UserResult};
pub use models::{NewUser, UpdateUser, User};
pub use password::{Argon2Hasher, HashError, PasswordHasher};
pub use repositories::{InMemoryUserRepository, PostgresUserRepository, UserRepository};
pub use service::UserService;
