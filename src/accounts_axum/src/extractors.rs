use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{AuthenticatedIdentity, PasswordHasher, SessionTokenIssuer, UserStore};
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::error::ApiError;

/// Identity taken from a verified `Authorization: Bearer` token.
///
/// Handlers that take this extractor never run for requests without a valid
/// session token; those are rejected with `401`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedIdentity);

impl<U, H, T> FromRequestParts<Arc<AccountService<U, H, T>>> for Authenticated
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        service: &Arc<AccountService<U, H, T>>,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, service)
                .await
                .map_err(|e| {
                    tracing::debug!(error = %e, "missing or malformed authorization header");
                    ApiError::Unauthenticated
                })?;

        let identity = service.authenticate(bearer.token())?;

        Ok(Self(identity))
    }
}
