use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A business rule was violated; always recoverable by the caller.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Credential verification failed. The kind stays inspectable so callers
    /// can log it without leaking it to the end user.
    #[error("Authentication failed: {0}")]
    Authentication(AuthenticationError),

    /// A referenced entity does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The persistence collaborator failed; propagated verbatim, never retried.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Credential verification failure kinds
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("user not found")]
    UserNotFound,

    #[error("invalid password")]
    InvalidPassword,
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Returns the authentication failure kind, if this is one.
    pub fn authentication_kind(&self) -> Option<AuthenticationError> {
        match self {
            Self::Authentication(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<AuthenticationError> for DomainError {
    fn from(kind: AuthenticationError) -> Self {
        Self::Authentication(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = DomainError::validation("invalid description");
        assert_eq!(error.to_string(), "Validation error: invalid description");
    }

    #[test]
    fn test_not_found_error_display() {
        let error = DomainError::not_found("entry 'abc' not found");
        assert_eq!(error.to_string(), "Not found: entry 'abc' not found");
    }

    #[test]
    fn test_authentication_kinds_stay_distinguishable() {
        let not_found: DomainError = AuthenticationError::UserNotFound.into();
        let bad_password: DomainError = AuthenticationError::InvalidPassword.into();

        assert_eq!(
            not_found.authentication_kind(),
            Some(AuthenticationError::UserNotFound)
        );
        assert_eq!(
            bad_password.authentication_kind(),
            Some(AuthenticationError::InvalidPassword)
        );
        assert_ne!(not_found.to_string(), bad_password.to_string());
    }

    #[test]
    fn test_non_authentication_error_has_no_kind() {
        let error = DomainError::storage("connection lost");
        assert!(error.authentication_kind().is_none());
    }
}
