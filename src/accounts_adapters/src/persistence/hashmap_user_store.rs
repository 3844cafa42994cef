use std::collections::HashMap;
use std::sync::Arc;

use accounts_core::{
    Email, NewUser, Role, RoleTier, User, UserStore, UserStoreError, UserUpdate, Username,
};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, User>,
    next_id: i64,
}

/// In-memory credential store, seeded with the well-known roles.
#[derive(Clone)]
pub struct HashMapUserStore {
    inner: Arc<RwLock<Inner>>,
    roles: Arc<Vec<Role>>,
}

impl Default for HashMapUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMapUserStore {
    pub fn new() -> Self {
        let roles = RoleTier::ALL
            .into_iter()
            .zip(1..)
            .map(|(tier, id)| Role {
                id,
                code: tier.code().to_string(),
                name: tier.display_name().to_string(),
            })
            .collect();

        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            roles: Arc::new(roles),
        }
    }

    fn role(&self, tier: RoleTier) -> Result<Role, UserStoreError> {
        self.roles
            .iter()
            .find(|role| role.code == tier.code())
            .cloned()
            .ok_or_else(|| UserStoreError::RoleNotFound(tier.code().to_string()))
    }
}

fn find<'a>(
    users: &'a HashMap<Uuid, User>,
    predicate: impl Fn(&User) -> bool,
) -> Option<&'a User> {
    users.values().find(|user| predicate(user))
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let inner = self.inner.read().await;
        find(&inner.users, |u| &u.username == username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let inner = self.inner.read().await;
        find(&inner.users, |u| &u.email == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<User, UserStoreError> {
        let inner = self.inner.read().await;
        inner
            .users
            .get(&uuid)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn register(&self, user: NewUser) -> Result<User, UserStoreError> {
        let role = self.role(user.role)?;
        let mut inner = self.inner.write().await;

        if find(&inner.users, |u| u.username == user.username).is_some() {
            return Err(UserStoreError::UsernameAlreadyExists);
        }
        if find(&inner.users, |u| u.email == user.email).is_some() {
            return Err(UserStoreError::EmailAlreadyExists);
        }

        inner.next_id += 1;
        let now = Utc::now();
        let created = User {
            id: inner.next_id,
            uuid: Uuid::new_v4(),
            name: user.name,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            phone_number: user.phone_number,
            role,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(created.uuid, created.clone());

        Ok(created)
    }

    async fn update(&self, uuid: Uuid, update: UserUpdate) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().await;

        if find(&inner.users, |u| u.uuid != uuid && u.username == update.username).is_some() {
            return Err(UserStoreError::UsernameAlreadyExists);
        }
        if find(&inner.users, |u| u.uuid != uuid && u.email == update.email).is_some() {
            return Err(UserStoreError::EmailAlreadyExists);
        }

        let user = inner
            .users
            .get_mut(&uuid)
            .ok_or(UserStoreError::UserNotFound)?;
        user.name = update.name;
        user.username = update.username;
        user.email = update.email;
        user.phone_number = update.phone_number;
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
