pub mod current_session;
pub mod get_user;
pub mod login;
pub mod register;
pub mod update_profile;

#[cfg(test)]
pub(crate) mod test_support;

use accounts_core::{Email, UserStore, UserStoreError, Username};

/// Only `UserNotFound` counts as absent; any other store failure is surfaced.
pub(crate) async fn username_exists<U>(
    user_store: &U,
    username: &Username,
) -> Result<bool, UserStoreError>
where
    U: UserStore,
{
    match user_store.find_by_username(username).await {
        Ok(_) => Ok(true),
        Err(UserStoreError::UserNotFound) => Ok(false),
        Err(e) => Err(e),
    }
}

pub(crate) async fn email_exists<U>(user_store: &U, email: &Email) -> Result<bool, UserStoreError>
where
    U: UserStore,
{
    match user_store.find_by_email(email).await {
        Ok(_) => Ok(true),
        Err(UserStoreError::UserNotFound) => Ok(false),
        Err(e) => Err(e),
    }
}
