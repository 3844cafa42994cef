use accounts_core::{
    Email, NewUser, Password, PasswordHasher, Profile, RoleTier, UserStore, Username,
};
use serde::Serialize;

use super::{email_exists, username_exists};
use crate::error::AccountError;

#[derive(Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub username: Username,
    pub password: Password,
    pub confirm_password: Password,
    pub phone_number: String,
    pub email: Email,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub user: Profile,
}

/// Register use case - creates a customer account
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// username taken, email taken, then password confirmation.
    /// New accounts always get the customer tier.
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, request),
        fields(username = %request.username, email = %request.email)
    )]
    pub async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, AccountError> {
        let password_hash = self.password_hasher.hash(&request.password).await?;

        if username_exists(self.user_store, &request.username).await? {
            return Err(AccountError::UsernameAlreadyExists);
        }

        if email_exists(self.user_store, &request.email).await? {
            return Err(AccountError::EmailAlreadyExists);
        }

        if !request.password.matches(&request.confirm_password) {
            return Err(AccountError::PasswordMismatch);
        }

        let user = self
            .user_store
            .register(NewUser {
                name: request.name,
                username: request.username,
                email: request.email,
                password_hash,
                phone_number: request.phone_number,
                role: RoleTier::Customer,
            })
            .await?;

        tracing::info!(uuid = %user.uuid, "user registered");

        Ok(RegisterResponse {
            user: user.profile(),
        })
    }
}
