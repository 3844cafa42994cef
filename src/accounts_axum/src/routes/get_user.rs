use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{PasswordHasher, Profile, SessionTokenIssuer, UserStore};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{error::ApiError, extractors::Authenticated};

#[tracing::instrument(name = "Get user", skip_all)]
pub async fn get_user<U, H, T>(
    State(service): State<Arc<AccountService<U, H, T>>>,
    _caller: Authenticated,
    Path(uuid): Path<Uuid>,
) -> Result<Json<Profile>, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    let profile = service.user_by_uuid(uuid).await?;

    Ok(Json(profile))
}
