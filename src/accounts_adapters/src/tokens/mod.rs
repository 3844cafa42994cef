pub mod jwt_session_issuer;

pub use jwt_session_issuer::JwtSessionIssuer;
