//! PostgreSQL-backed user repository

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::repositories::UserRepository;

/// User repository backed by PostgreSQL
///
/// Expects a `users` table with a unique index on `username` and
/// database-assigned `id`, `created_at` and `updated_at` columns.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        info!("Finding user by ID: {}", id);

        let row = sqlx::query(
            r#"
            SELECT id, username, email, full_name, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        match row {
            Some(row) => {
                let user = User {
                    id: row.get("id"),
                    username: row.get("username"),
                    email: row.get("email"),
                    full_name: row.get("full_name"),
                    password_hash: row.get("password_hash"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        info!("Finding user by username: {}", username);

        let row = sqlx::query(
            r#"
            SELECT id, username, email, full_name, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        match row {
            Some(row) => {
                let user = User {
                    id: row.get("id"),
                    username: row.get("username"),
                    email: row.get("email"),
                    full_name: row.get("full_name"),
                    password_hash: row.get("password_hash"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DatabaseError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, full_name, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        let users = rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                username: row.get("username"),
                email: row.get("email"),
                full_name: row.get("full_name"),
                password_hash: row.get("password_hash"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(users)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DatabaseError> {
        info!("Inserting new user: {}", user.username);

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, full_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, full_name, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        let user = User {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            full_name: row.get("full_name"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        };

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DatabaseError> {
        info!("Updating user: {}", user.id);

        let row = sqlx::query(
            r#"
            UPDATE users
            SET email = $1, full_name = $2, password_hash = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, username, email, full_name, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(user.id)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        let user = User {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            full_name: row.get("full_name"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        };

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        info!("Deleting user: {}", id);

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(())
    }
}
