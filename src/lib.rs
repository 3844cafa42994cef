//! # Accounts - Account Service Library
//!
//! Facade crate that re-exports the public APIs of the account service components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! accounts = { path = "../accounts" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Email`, `Password`, `User`, `Profile`, etc.
//! - **Ports**: `UserStore`, `PasswordHasher`, `SessionTokenIssuer`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`, `UpdateProfileUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `Argon2PasswordHasher`, `JwtSessionIssuer`
//! - **Service**: `AccountsApp` - HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

pub use accounts_core::{
    AuthenticatedIdentity, Email, NewUser, Password, PasswordHash, Profile, Role, RoleTier,
    SessionClaims, User, UserError, UserUpdate, Username,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and service trait definitions
pub mod ports {
    pub use accounts_core::{
        PasswordHasher, PasswordHasherError, SessionTokenError, SessionTokenIssuer, UserStore,
        UserStoreError,
    };
}

pub use ports::{
    PasswordHasher, PasswordHasherError, SessionTokenError, SessionTokenIssuer, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::*;
}

pub use accounts_application::{
    AccountError, AccountService, CurrentSessionUseCase, GetUserUseCase, LoginUseCase,
    RegisterUseCase, SessionSettings, UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and extractors
    pub mod http {
        pub use accounts_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use accounts_adapters::hashing::*;
    }

    /// Session tokens
    pub mod tokens {
        pub use accounts_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }
}

pub use accounts_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtSessionIssuer, PostgresUserStore,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

pub use accounts_service::{
    AccountsApp, BootstrapError, configure_postgresql, get_postgres_pool, init_tracing,
    seed_administrator,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
