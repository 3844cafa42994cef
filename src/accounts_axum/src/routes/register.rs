use std::sync::Arc;

use accounts_application::{AccountService, RegisterRequest};
use accounts_core::{
    Email, Password, PasswordHasher, SessionTokenIssuer, UserStore, Username, bounded_text,
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub name: String,
    pub username: String,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
    pub phone_number: String,
    pub email: String,
}

impl TryFrom<RegisterBody> for RegisterRequest {
    type Error = ApiError;

    fn try_from(body: RegisterBody) -> Result<Self, Self::Error> {
        Ok(RegisterRequest {
            name: bounded_text("name", body.name)?,
            username: Username::parse(body.username)?,
            password: Password::try_from(body.password)?,
            confirm_password: Password::try_from(body.confirm_password)?,
            phone_number: bounded_text("phone number", body.phone_number)?,
            email: Email::parse(body.email)?,
        })
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H, T>(
    State(service): State<Arc<AccountService<U, H, T>>>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    let response = service.register(body.try_into()?).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
