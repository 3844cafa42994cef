use std::fmt;

use serde::Serialize;

use super::user::UserError;

const MAX_USERNAME_LENGTH: usize = 255;

/// Login name. Unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: impl Into<String>) -> Result<Self, UserError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(UserError::InvalidUsername(
                "username must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UserError::InvalidUsername(format!(
                "username must be at most {MAX_USERNAME_LENGTH} characters"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
