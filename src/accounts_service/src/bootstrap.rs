use accounts_adapters::config::AdminSeedSettings;
use accounts_core::{
    Email, NewUser, Password, PasswordHasher, PasswordHasherError, RoleTier, UserError, UserStore,
    UserStoreError, Username, bounded_text,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid administrator seed: {0}")]
    InvalidSeed(#[from] UserError),

    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),

    #[error("Password hasher error: {0}")]
    PasswordHasher(#[from] PasswordHasherError),
}

/// Create the configured administrator unless a user with that username already exists.
#[tracing::instrument(name = "Seeding administrator", skip_all, fields(username = %admin.username))]
pub async fn seed_administrator<U, H>(
    user_store: &U,
    password_hasher: &H,
    admin: &AdminSeedSettings,
) -> Result<(), BootstrapError>
where
    U: UserStore,
    H: PasswordHasher,
{
    let username = Username::parse(admin.username.as_str())?;

    match user_store.find_by_username(&username).await {
        Ok(_) => {
            tracing::info!("administrator already present");
            return Ok(());
        }
        Err(UserStoreError::UserNotFound) => {}
        Err(e) => return Err(e.into()),
    }

    let email = Email::parse(admin.email.as_str())?;
    let name = bounded_text("name", admin.name.clone())?;
    let phone_number = bounded_text("phone number", admin.phone_number.clone())?;
    let password = Password::try_from(admin.password.clone())?;
    let password_hash = password_hasher.hash(&password).await?;

    let user = user_store
        .register(NewUser {
            name,
            username,
            email,
            password_hash,
            phone_number,
            role: RoleTier::Admin,
        })
        .await?;

    tracing::info!(uuid = %user.uuid, "administrator created");
    Ok(())
}
