use accounts_adapters::{
    Argon2PasswordHasher, JwtSessionIssuer, PostgresUserStore, config::Settings,
};
use accounts_application::AccountService;
use accounts_service::{AccountsApp, configure_postgresql, init_tracing, seed_administrator};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    tracing::info!(
        name = %settings.application.name,
        env = %settings.application.env,
        "starting"
    );

    let pg_pool = configure_postgresql(&settings.database).await?;

    let user_store = PostgresUserStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher::default();

    if let Some(admin) = &settings.bootstrap.admin {
        seed_administrator(&user_store, &password_hasher, admin).await?;
    }

    let service = AccountService::new(
        user_store,
        password_hasher,
        JwtSessionIssuer::new(&settings.jwt.secret_key),
        settings.jwt.session_settings(),
    );

    let listener = TcpListener::bind(settings.application.address()).await?;

    AccountsApp::new(service)
        .run_standalone(listener, &settings.application.allowed_origins)
        .await?;

    Ok(())
}
