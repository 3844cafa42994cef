use accounts_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash as EncodedHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core,
    },
};
use secrecy::{ExposeSecret, Secret};

/// Argon2id hashing on the blocking thread pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        // m = 15000 KiB, t = 2, p = 1
        let params = Params::new(15000, 2, 1, None).unwrap_or_default();
        Self::new(params)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let password = password.clone();
        let hasher = self.hasher();

        let encoded = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))??;

        PasswordHash::parse(Secret::from(encoded))
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<(), PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let candidate = candidate.clone();
        let expected = expected.clone();
        let hasher = self.hasher();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash = EncodedHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

                // Parameters come from the encoded hash, so rows hashed with other costs still verify.
                hasher
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected_hash,
                    )
                    .map_err(|e| match e {
                        password_hash::Error::Password => PasswordHasherError::Mismatch,
                        other => PasswordHasherError::UnexpectedError(other.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}
