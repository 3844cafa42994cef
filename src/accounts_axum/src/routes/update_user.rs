use std::sync::Arc;

use accounts_application::{AccountService, UpdateProfileRequest};
use accounts_core::{
    Email, Password, PasswordHasher, Profile, SessionTokenIssuer, UserStore, Username,
    bounded_text,
};
use axum::{
    Json,
    extract::{Path, State},
};
use secrecy::Secret;
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, extractors::Authenticated};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub confirm_password: Option<Secret<String>>,
}

impl TryFrom<UpdateUserBody> for UpdateProfileRequest {
    type Error = ApiError;

    fn try_from(body: UpdateUserBody) -> Result<Self, Self::Error> {
        Ok(UpdateProfileRequest {
            name: bounded_text("name", body.name)?,
            username: Username::parse(body.username)?,
            email: Email::parse(body.email)?,
            phone_number: bounded_text("phone number", body.phone_number)?,
            password: body.password.map(Password::try_from).transpose()?,
            confirm_password: body.confirm_password.map(Password::try_from).transpose()?,
        })
    }
}

#[tracing::instrument(name = "Update user", skip_all)]
pub async fn update_user<U, H, T>(
    State(service): State<Arc<AccountService<U, H, T>>>,
    _caller: Authenticated,
    Path(uuid): Path<Uuid>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<Profile>, ApiError>
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    let profile = service.update(uuid, body.try_into()?).await?;

    Ok(Json(profile))
}
