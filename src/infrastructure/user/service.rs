//! User service for registration and authentication

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_email, validate_name, validate_password, NewUser, User, UserId, UserRepository,
};
use crate::domain::{AuthenticationError, DomainError};

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User service for registration and credential verification
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user.
    ///
    /// The email must not already be registered; the check is not atomic with
    /// the save, so the repository remains the last line of defense against a
    /// concurrent registration.
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        info!(email = %request.email, "Registering user");

        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        self.check_email_available(&request.email).await?;

        let password_hash = self.hasher.hash(&request.password)?;

        self.repository
            .save(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
            })
            .await
    }

    /// Verify credentials and return the matching user.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError::UserNotFound` when no user has the email,
    /// `AuthenticationError::InvalidPassword` when the password does not match
    /// the stored hash.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        debug!(email = %email, "Authenticating user");

        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or(AuthenticationError::UserNotFound)?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(AuthenticationError::InvalidPassword.into());
        }

        Ok(user)
    }

    /// Fail if the email is already registered.
    pub async fn check_email_available(&self, email: &str) -> Result<(), DomainError> {
        if self.repository.email_exists(email).await? {
            return Err(DomainError::validation(format!(
                "a user is already registered with email '{email}'"
            )));
        }

        Ok(())
    }

    /// Get a user by ID
    pub async fn find(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }
}
