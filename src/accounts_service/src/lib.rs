pub mod accounts_app;
pub mod bootstrap;
pub mod helpers;
pub mod telemetry;

pub use accounts_app::AccountsApp;
pub use bootstrap::{BootstrapError, seed_administrator};
pub use helpers::{configure_postgresql, get_postgres_pool};
pub use telemetry::init_tracing;
