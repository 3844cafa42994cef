use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{PasswordHasher, Profile, SessionTokenIssuer, UserStore};
use axum::{Json, extract::State};

use crate::extractors::Authenticated;

/// Echoes the identity carried by the session token. No store lookup.
#[tracing::instrument(name = "Current user", skip_all)]
pub async fn current_user<U, H, T>(
    State(service): State<Arc<AccountService<U, H, T>>>,
    Authenticated(identity): Authenticated,
) -> Json<Profile>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    Json(service.current_session(&identity))
}
