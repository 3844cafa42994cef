use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::{Password, PasswordHash},
    profile::SessionClaims,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Returns `Err(PasswordHasherError::Mismatch)` when `candidate` does not produce `expected`.
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<(), PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    Expired,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Signs and verifies stateless session tokens.
pub trait SessionTokenIssuer: Send + Sync {
    fn issue(&self, claims: &SessionClaims) -> Result<String, SessionTokenError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError>;
}
