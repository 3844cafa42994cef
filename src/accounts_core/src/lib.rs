pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    password::{Password, PasswordHash},
    profile::{AuthenticatedIdentity, Profile, SessionClaims},
    role::{Role, RoleTier},
    user::{NewUser, User, UserError, UserUpdate, bounded_text},
    username::Username,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError, SessionTokenError, SessionTokenIssuer},
};
