//! Axum integration for the account service.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  accounts_application: AccountService    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  accounts_axum                           │
//! │  - JSON route handlers                   │
//! │  - bearer token extractor                │
//! │  - error to status code mapping          │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use accounts_axum::routes;
//!
//! let app = Router::new().nest("/api/v1/auth", routes::router(Arc::new(service)));
//! ```

pub mod error;
pub mod extractors;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
pub use extractors::Authenticated;
