//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New user creation payload
///
/// The identity is assigned by the repository on insert. The `password`
/// field is plaintext at the service boundary; the service replaces it with
/// a digest before the payload reaches a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// User update payload
///
/// Email and full name always overwrite the stored values. The password is
/// applied only when present and non-empty. Username and identity are never
/// touched by an update.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub email: String,
    pub full_name: String,
    pub password: Option<String>,
}
