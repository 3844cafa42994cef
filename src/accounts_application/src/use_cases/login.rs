use accounts_core::{
    Password, PasswordHasher, Profile, SessionClaims, SessionTokenError, SessionTokenIssuer,
    UserStore, UserStoreError, Username,
};
use chrono::Utc;
use serde::Serialize;

use crate::{account_service::SessionSettings, error::AccountError};

#[derive(Debug)]
pub struct LoginRequest {
    pub username: Username,
    pub password: Password,
}

/// Profile (with role) and the signed session token.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: Profile,
    pub token: String,
}

/// Login use case - verifies credentials and issues a session token
pub struct LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: SessionTokenIssuer,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_issuer: &'a T,
    session: &'a SessionSettings,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: SessionTokenIssuer,
{
    pub fn new(
        user_store: &'a U,
        password_hasher: &'a H,
        token_issuer: &'a T,
        session: &'a SessionSettings,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_issuer,
            session,
        }
    }

    /// Execute the login use case
    ///
    /// An unknown username and a wrong password both yield
    /// `AccountError::InvalidCredentials`. No token is produced unless the
    /// password hash verifies.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, request), fields(username = %request.username))]
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, AccountError> {
        let user = match self.user_store.find_by_username(&request.username).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                tracing::debug!("login attempt for unknown username");
                return Err(AccountError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        self.password_hasher
            .verify(&request.password, &user.password_hash)
            .await?;

        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.session.expiration())
            .ok_or_else(|| {
                SessionTokenError::UnexpectedError(
                    "session expiration is out of range".to_string(),
                )
            })?;
        let claims = SessionClaims::new(&user, issued_at, expires_at);
        let token = self.token_issuer.issue(&claims)?;

        tracing::info!(uuid = %user.uuid, role = %user.role.code, "user logged in");

        Ok(LoginResponse {
            user: claims.user,
            token,
        })
    }
}
