use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    user::{NewUser, User, UserUpdate},
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("Username already exists")]
    UsernameAlreadyExists,
    #[error("Email already exists")]
    EmailAlreadyExists,
    #[error("Role {0} not found")]
    RoleNotFound(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UsernameAlreadyExists, Self::UsernameAlreadyExists) => true,
            (Self::EmailAlreadyExists, Self::EmailAlreadyExists) => true,
            (Self::RoleNotFound(a), Self::RoleNotFound(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Credential store. Implementations must enforce username and email uniqueness themselves;
/// callers' existence checks are only advisory.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<User, UserStoreError>;
    async fn register(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn update(&self, uuid: Uuid, update: UserUpdate) -> Result<User, UserStoreError>;
}
