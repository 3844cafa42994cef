use std::sync::Arc;

use accounts_application::{AccountService, LoginRequest, LoginResponse};
use accounts_core::{Password, PasswordHasher, SessionTokenIssuer, UserStore, Username};
use axum::{Json, extract::State};
use secrecy::Secret;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State(service): State<Arc<AccountService<U, H, T>>>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    let request = LoginRequest {
        username: Username::parse(body.username)?,
        password: Password::try_from(body.password)?,
    };

    let response = service.login(request).await?;

    Ok(Json(response))
}
