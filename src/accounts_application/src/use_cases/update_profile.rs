use accounts_core::{Email, Password, PasswordHasher, Profile, UserStore, UserUpdate, Username};
use uuid::Uuid;

use super::{email_exists, username_exists};
use crate::error::AccountError;

/// Replacement profile values. Leaving `password` out keeps the current password.
#[derive(Debug)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub username: Username,
    pub email: Email,
    pub phone_number: String,
    pub password: Option<Password>,
    pub confirm_password: Option<Password>,
}

/// Update profile use case - edits an existing account
pub struct UpdateProfileUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
}

impl<'a, U, H> UpdateProfileUseCase<'a, U, H>
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

    /// Execute the update profile use case
    ///
    /// A user keeping their own username or email never conflicts with
    /// themselves.
    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        uuid: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<Profile, AccountError> {
        let current = self.user_store.find_by_uuid(uuid).await?;

        if current.username != request.username
            && username_exists(self.user_store, &request.username).await?
        {
            return Err(AccountError::UsernameAlreadyExists);
        }

        if current.email != request.email
            && email_exists(self.user_store, &request.email).await?
        {
            return Err(AccountError::EmailAlreadyExists);
        }

        let password_hash = match (&request.password, &request.confirm_password) {
            (None, None) => None,
            (Some(password), Some(confirm)) if password.matches(confirm) => {
                Some(self.password_hasher.hash(password).await?)
            }
            _ => return Err(AccountError::PasswordMismatch),
        };

        let password_changed = password_hash.is_some();
        let user = self
            .user_store
            .update(
                uuid,
                UserUpdate {
                    name: request.name,
                    username: request.username,
                    email: request.email,
                    phone_number: request.phone_number,
                    password_hash,
                },
            )
            .await?;

        tracing::info!(password_changed, "user profile updated");

        Ok(user.profile())
    }
}
