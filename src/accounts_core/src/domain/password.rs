use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Plaintext password as received from a client.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Exact comparison, used for password / confirmation pairs.
    pub fn matches(&self, other: &Password) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Encoded one-way hash of a password (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn parse(value: Secret<String>) -> Result<Self, UserError> {
        if value.expose_secret().is_empty() {
            return Err(UserError::EmptyPasswordHash);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
