use accounts_core::{AuthenticatedIdentity, Profile};

/// Current session use case - returns the identity established by token verification
pub struct CurrentSessionUseCase<'a> {
    identity: &'a AuthenticatedIdentity,
}

impl<'a> CurrentSessionUseCase<'a> {
    pub fn new(identity: &'a AuthenticatedIdentity) -> Self {
        Self { identity }
    }

    #[tracing::instrument(name = "CurrentSessionUseCase::execute", skip(self))]
    pub fn execute(&self) -> Profile {
        let profile = self.identity.profile();
        tracing::debug!(
            uuid = %profile.uuid,
            username = %profile.username,
            role = profile.role.as_deref().unwrap_or_default(),
            "resolved current session"
        );
        profile.clone()
    }
}
