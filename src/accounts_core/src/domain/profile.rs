use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Payload signed into a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: Profile,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(user: &User, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user: user.session_profile(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Identity established by a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity(Profile);

impl AuthenticatedIdentity {
    pub fn profile(&self) -> &Profile {
        &self.0
    }
}

impl From<SessionClaims> for AuthenticatedIdentity {
    fn from(claims: SessionClaims) -> Self {
        Self(claims.user)
    }
}
