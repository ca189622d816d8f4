//! In-memory user repository
//!
//! Keeps its records in process memory. Useful for tests and callers that
//! do not need a database.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use common::error::DatabaseError;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::repositories::UserRepository;

/// User repository holding its records in a map keyed by ID
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DatabaseError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            password_hash: user.password.clone(),
            created_at: now,
            updated_at: now,
        };

        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DatabaseError> {
        let mut users = self.users.write().await;

        match users.get_mut(&user.id) {
            Some(stored) => {
                stored.email = user.email.clone();
                stored.full_name = user.full_name.clone();
                stored.password_hash = user.password_hash.clone();
                stored.updated_at = Utc::now();
                Ok(stored.clone())
            }
            // Same failure an UPDATE .. RETURNING round-trip reports
            None => Err(DatabaseError::Query(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        self.users.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            full_name: username.to_string(),
            password: "digest".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_identity_and_timestamps() {
        let repo = InMemoryUserRepository::new();

        let user = repo.insert(&new_user("alice")).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_find_by_id_and_username() {
        let repo = InMemoryUserRepository::new();

        let user = repo.insert(&new_user("alice")).await.unwrap();

        let by_id = repo.find_by_id(user.id).await.unwrap();
        assert_eq!(by_id.unwrap().username, "alice");

        let by_username = repo.find_by_username("alice").await.unwrap();
        assert_eq!(by_username.unwrap().id, user.id);

        assert!(repo.find_by_username("bob").await.unwrap().is_none());
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_creation() {
        let repo = InMemoryUserRepository::new();

        repo.insert(&new_user("alice")).await.unwrap();
        repo.insert(&new_user("bob")).await.unwrap();

        let users = repo.find_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].created_at <= users[1].created_at);
    }

    #[tokio::test]
    async fn test_update_overwrites_in_place() {
        let repo = InMemoryUserRepository::new();

        let mut user = repo.insert(&new_user("alice")).await.unwrap();
        user.email = "new@example.com".to_string();

        let updated = repo.update(&user).await.unwrap();
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_user_fails() {
        let repo = InMemoryUserRepository::new();

        let user = repo.insert(&new_user("alice")).await.unwrap();
        repo.delete(user.id).await.unwrap();

        let result = repo.update(&user).await;
        assert!(matches!(result, Err(DatabaseError::Query(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_user() {
        let repo = InMemoryUserRepository::new();

        let user = repo.insert(&new_user("alice")).await.unwrap();
        repo.delete(user.id).await.unwrap();

        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
