use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::{
    email::Email,
    password::PasswordHash,
    profile::Profile,
    role::{Role, RoleTier},
    username::Username,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Password hash must not be empty")]
    EmptyPasswordHash,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

const MAX_TEXT_LENGTH: usize = 255;

/// Free-text profile fields (name, phone number) fit the same column width as usernames.
pub fn bounded_text(field: &'static str, value: String) -> Result<String, UserError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(UserError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(value)
}

/// A persisted account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub phone_number: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public projection without role.
    pub fn profile(&self) -> Profile {
        Profile {
            uuid: self.uuid,
            name: self.name.clone(),
            username: self.username.to_string(),
            phone_number: self.phone_number.clone(),
            email: self.email.to_string(),
            role: None,
        }
    }

    /// Public projection carrying the lowercased role code.
    pub fn session_profile(&self) -> Profile {
        Profile {
            role: Some(self.role.session_code()),
            ..self.profile()
        }
    }
}

/// Fields the store needs to insert a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub phone_number: String,
    pub role: RoleTier,
}

/// Replacement values for an existing account. `password_hash: None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub username: Username,
    pub email: Email,
    pub phone_number: String,
    pub password_hash: Option<PasswordHash>,
}
