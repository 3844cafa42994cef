use accounts_core::{
    AuthenticatedIdentity, PasswordHasher, Profile, SessionTokenIssuer, UserStore,
};
use uuid::Uuid;

use crate::{
    error::AccountError,
    use_cases::{
        current_session::CurrentSessionUseCase,
        get_user::GetUserUseCase,
        login::{LoginRequest, LoginResponse, LoginUseCase},
        register::{RegisterRequest, RegisterResponse, RegisterUseCase},
        update_profile::{UpdateProfileRequest, UpdateProfileUseCase},
    },
};

/// Session token lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    expiration: chrono::Duration,
}

impl SessionSettings {
    /// Values beyond the representable range saturate; login then fails instead of panicking.
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            expiration: chrono::Duration::try_minutes(minutes).unwrap_or(chrono::Duration::MAX),
        }
    }

    pub fn expiration(&self) -> chrono::Duration {
        self.expiration
    }
}

/// Entry point for the account workflows.
///
/// Owns the store, hasher and token issuer and hands borrowed views of them
/// to the individual use cases.
pub struct AccountService<U, H, T> {
    user_store: U,
    password_hasher: H,
    token_issuer: T,
    session: SessionSettings,
}

impl<U, H, T> AccountService<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: SessionTokenIssuer,
{
    pub fn new(user_store: U, password_hasher: H, token_issuer: T, session: SessionSettings) -> Self {
        Self {
            user_store,
            password_hasher,
            token_issuer,
            session,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AccountError> {
        LoginUseCase::new(
            &self.user_store,
            &self.password_hasher,
            &self.token_issuer,
            &self.session,
        )
        .execute(request)
        .await
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, AccountError> {
        RegisterUseCase::new(&self.user_store, &self.password_hasher)
            .execute(request)
            .await
    }

    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<Profile, AccountError> {
        UpdateProfileUseCase::new(&self.user_store, &self.password_hasher)
            .execute(uuid, request)
            .await
    }

    pub fn current_session(&self, identity: &AuthenticatedIdentity) -> Profile {
        CurrentSessionUseCase::new(identity).execute()
    }

    pub async fn user_by_uuid(&self, uuid: Uuid) -> Result<Profile, AccountError> {
        GetUserUseCase::new(&self.user_store).execute(uuid).await
    }

    /// Verifies a bearer token and returns the identity it carries.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedIdentity, AccountError> {
        let claims = self.token_issuer.verify(token)?;
        Ok(AuthenticatedIdentity::from(claims))
    }
}
