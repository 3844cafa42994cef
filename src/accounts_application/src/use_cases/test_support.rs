//! Hand-written doubles shared by the use case tests.

use std::sync::{
    RwLock,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use accounts_core::{
    Email, NewUser, Password, PasswordHash, PasswordHasher, PasswordHasherError, Role, RoleTier,
    SessionClaims, SessionTokenError, SessionTokenIssuer, User, UserStore, UserStoreError,
    UserUpdate, Username,
};
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

#[derive(Default)]
pub struct MockUserStore {
    users: RwLock<Vec<User>>,
    fail_lookups: AtomicBool,
    fail_existence_checks: AtomicBool,
    updates: AtomicUsize,
}

impl MockUserStore {
    pub fn failing_lookups() -> Self {
        let store = Self::default();
        store.fail_lookups.store(true, Ordering::SeqCst);
        store
    }

    /// Username and email lookups fail from now on; lookups by uuid keep working.
    pub fn fail_existence_checks(&self) {
        self.fail_existence_checks.store(true, Ordering::SeqCst);
    }

    fn existence_check(
        &self,
        predicate: impl Fn(&User) -> bool,
    ) -> Result<User, UserStoreError> {
        if self.fail_existence_checks.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError("read timeout".to_string()));
        }
        self.lookup(predicate)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn stored_hash(&self, uuid: Uuid) -> Option<String> {
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.uuid == uuid)
            .map(|u| u.password_hash.as_ref().expose_secret().clone())
    }

    fn lookup(&self, predicate: impl Fn(&User) -> bool) -> Result<User, UserStoreError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError(
                "connection refused".to_string(),
            ));
        }
        self.users
            .read()
            .unwrap()
            .iter()
            .find(|u| predicate(u))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

fn role(tier: RoleTier) -> Role {
    Role {
        id: match tier {
            RoleTier::Admin => 1,
            RoleTier::Customer => 2,
        },
        code: tier.code().to_string(),
        name: tier.display_name().to_string(),
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        self.existence_check(|u| &u.username == username)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.existence_check(|u| &u.email == email)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<User, UserStoreError> {
        self.lookup(|u| u.uuid == uuid)
    }

    async fn register(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserStoreError::UsernameAlreadyExists);
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserStoreError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let created = User {
            id: users.len() as i64 + 1,
            uuid: Uuid::new_v4(),
            name: user.name,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            phone_number: user.phone_number,
            role: role(user.role),
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, uuid: Uuid, update: UserUpdate) -> Result<User, UserStoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.uuid == uuid)
            .ok_or(UserStoreError::UserNotFound)?;
        user.name = update.name;
        user.username = update.username;
        user.email = update.email;
        user.phone_number = update.phone_number;
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

/// Reversible "hash" so tests can see what was stored.
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let hashed = format!("hashed:{}", password.as_ref().expose_secret());
        PasswordHash::parse(Secret::from(hashed))
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
    }

    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<(), PasswordHasherError> {
        let hashed = format!("hashed:{}", candidate.as_ref().expose_secret());
        if &hashed == expected.as_ref().expose_secret() {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }
}

/// Tokens are the claims as plain JSON.
pub struct MockTokenIssuer;

impl SessionTokenIssuer for MockTokenIssuer {
    fn issue(&self, claims: &SessionClaims) -> Result<String, SessionTokenError> {
        serde_json::to_string(claims).map_err(|e| SessionTokenError::UnexpectedError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        serde_json::from_str(token).map_err(|_| SessionTokenError::InvalidToken)
    }
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_string())).unwrap()
}

pub fn username(raw: &str) -> Username {
    Username::parse(raw).unwrap()
}

pub fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap()
}

/// Inserts a user directly, bypassing the register workflow.
pub async fn seed_user(store: &MockUserStore, name: &str, plain_password: &str) -> User {
    store
        .register(NewUser {
            name: name.to_string(),
            username: username(name),
            email: email(&format!("{name}@x.com")),
            password_hash: MockPasswordHasher.hash(&password(plain_password)).await.unwrap(),
            phone_number: "0987654321".to_string(),
            role: RoleTier::Customer,
        })
        .await
        .unwrap()
}
