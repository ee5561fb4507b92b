//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    /// Index for email -> user ID lookup; doubles as the uniqueness constraint
    email_index: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, candidate: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;

        if email_index.contains_key(&candidate.email) {
            return Err(DomainError::validation(format!(
                "a user is already registered with email '{}'",
                candidate.email
            )));
        }

        let user = User::new(UserId::new(), candidate);
        email_index.insert(user.email().to_string(), user.id());
        users.insert(user.id(), user.clone());

        Ok(user)
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email_index = self.email_index.read().await;

        let Some(id) = email_index.get(email) else {
            return Ok(None);
        };

        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let mut email_index = self.email_index.write().await;

        match users.remove(id) {
            Some(user) => {
                email_index.remove(user.email());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let email_index = self.email_index.read().await;
        Ok(email_index.contains_key(email))
    }
}
