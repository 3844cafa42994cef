pub mod config;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapUserStore, PostgresUserStore};
pub use tokens::JwtSessionIssuer;
