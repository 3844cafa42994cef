use accounts_core::{PasswordHasherError, SessionTokenError, UserStoreError};
use thiserror::Error;

/// Failures of the account workflows.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("User not found")]
    UserNotFound,
    #[error("Username already exists")]
    UsernameAlreadyExists,
    #[error("Email already exists")]
    EmailAlreadyExists,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Password does not match")]
    PasswordMismatch,
    #[error("User not authenticated")]
    Unauthenticated,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(PasswordHasherError),
    #[error("Session token error: {0}")]
    SessionTokenError(SessionTokenError),
}

impl From<UserStoreError> for AccountError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound => AccountError::UserNotFound,
            UserStoreError::UsernameAlreadyExists => AccountError::UsernameAlreadyExists,
            UserStoreError::EmailAlreadyExists => AccountError::EmailAlreadyExists,
            e => AccountError::UserStoreError(e),
        }
    }
}

impl From<PasswordHasherError> for AccountError {
    fn from(error: PasswordHasherError) -> Self {
        match error {
            PasswordHasherError::Mismatch => AccountError::InvalidCredentials,
            e => AccountError::PasswordHasherError(e),
        }
    }
}

impl From<SessionTokenError> for AccountError {
    fn from(error: SessionTokenError) -> Self {
        match error {
            SessionTokenError::InvalidToken | SessionTokenError::Expired => {
                AccountError::Unauthenticated
            }
            e => AccountError::SessionTokenError(e),
        }
    }
}
