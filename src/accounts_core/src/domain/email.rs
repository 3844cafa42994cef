use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use super::user::UserError;

const MAX_EMAIL_LENGTH: usize = 255;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validated, trimmed email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, UserError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(UserError::InvalidEmail("email must not be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_EMAIL_LENGTH {
            return Err(UserError::InvalidEmail(format!(
                "email must be at most {MAX_EMAIL_LENGTH} characters"
            )));
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(UserError::InvalidEmail(format!("'{trimmed}' is not an email")));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
