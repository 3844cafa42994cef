use accounts_adapters::config::DatabaseSettings;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::bootstrap::BootstrapError;

/// Connect to PostgreSQL and bring the schema up to date.
///
/// Migrations also seed the `ADMIN` and `CUSTOMER` roles.
pub async fn configure_postgresql(settings: &DatabaseSettings) -> Result<PgPool, BootstrapError> {
    let pg_pool = get_postgres_pool(settings).await?;

    sqlx::migrate!().run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a connection pool sized from the database settings.
pub async fn get_postgres_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_open_connections)
        .min_connections(settings.max_idle_connections.min(settings.max_open_connections))
        .max_lifetime(settings.max_lifetime())
        .idle_timeout(settings.idle_timeout())
        .connect(settings.url.expose_secret())
        .await
}
