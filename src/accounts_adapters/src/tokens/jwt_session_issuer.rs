use accounts_core::{SessionClaims, SessionTokenError, SessionTokenIssuer};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};

/// HS256 session tokens signed with a server-held secret.
#[derive(Clone)]
pub struct JwtSessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionIssuer {
    pub fn new(secret: &Secret<String>) -> Self {
        let secret = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl SessionTokenIssuer for JwtSessionIssuer {
    fn issue(&self, claims: &SessionClaims) -> Result<String, SessionTokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| SessionTokenError::UnexpectedError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionTokenError::Expired,
                _ => {
                    tracing::debug!(error = %e, "rejected session token");
                    SessionTokenError::InvalidToken
                }
            })
    }
}
