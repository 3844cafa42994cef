use accounts_core::{Profile, UserStore};
use uuid::Uuid;

use crate::error::AccountError;

/// Get user use case - public profile lookup by external identifier
pub struct GetUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> GetUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetUserUseCase::execute", skip(self))]
    pub async fn execute(&self, uuid: Uuid) -> Result<Profile, AccountError> {
        let user = self.user_store.find_by_uuid(uuid).await?;
        Ok(user.profile())
    }
}
