use accounts_core::{
    Email, NewUser, PasswordHash, Role, User, UserError, UserStore, UserStoreError, UserUpdate,
    Username,
};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

macro_rules! select_user_from {
    ($source:literal) => {
        concat!(
            "SELECT u.id, u.uuid, u.name, u.username, u.password_hash, u.phone_number, u.email, ",
            "u.created_at, u.updated_at, ",
            "r.id AS role_id, r.code AS role_code, r.name AS role_name ",
            "FROM ",
            $source,
            " u JOIN roles r ON r.id = u.role_id"
        )
    };
}

pub struct PostgresUserStore {
    pool: sqlx::PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

impl Clone for PostgresUserStore {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    uuid: Uuid,
    name: String,
    username: String,
    password_hash: String,
    phone_number: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    role_id: i32,
    role_code: String,
    role_name: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let corrupt = |e: UserError| UserStoreError::UnexpectedError(e.to_string());

        Ok(User {
            id: row.id,
            uuid: row.uuid,
            name: row.name,
            username: Username::parse(row.username).map_err(corrupt)?,
            email: Email::parse(row.email).map_err(corrupt)?,
            password_hash: PasswordHash::parse(Secret::from(row.password_hash)).map_err(corrupt)?,
            phone_number: row.phone_number,
            role: Role {
                id: row.role_id,
                code: row.role_code,
                name: row.role_name,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn found(row: Option<UserRow>) -> Result<User, UserStoreError> {
    match row {
        Some(row) => row.try_into(),
        None => Err(UserStoreError::UserNotFound),
    }
}

fn map_read_error(e: sqlx::Error) -> UserStoreError {
    UserStoreError::UnexpectedError(e.to_string())
}

/// Unique violations are the authoritative uniqueness check; map them onto conflicts.
fn map_write_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.constraint() {
            Some(USERNAME_UNIQUE_CONSTRAINT) => return UserStoreError::UsernameAlreadyExists,
            Some(EMAIL_UNIQUE_CONSTRAINT) => return UserStoreError::EmailAlreadyExists,
            _ => {}
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user by username from PostgreSQL", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(concat!(
            select_user_from!("users"),
            " WHERE u.username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        found(row)
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(concat!(
            select_user_from!("users"),
            " WHERE u.email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        found(row)
    }

    #[tracing::instrument(name = "Retrieving user by uuid from PostgreSQL", skip_all, fields(%uuid))]
    async fn find_by_uuid(&self, uuid: Uuid) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(concat!(
            select_user_from!("users"),
            " WHERE u.uuid = $1"
        ))
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        found(row)
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn register(&self, user: NewUser) -> Result<User, UserStoreError> {
        // The role is resolved by code inside the insert; no row back means no such role.
        let row = sqlx::query_as::<_, UserRow>(concat!(
            "WITH written AS (",
            "INSERT INTO users (uuid, name, username, password_hash, phone_number, email, role_id) ",
            "SELECT $1, $2, $3, $4, $5, $6, roles.id FROM roles WHERE roles.code = $7 ",
            "RETURNING *) ",
            select_user_from!("written")
        ))
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(user.username.as_str())
        .bind(user.password_hash.as_ref().expose_secret())
        .bind(&user.phone_number)
        .bind(user.email.as_str())
        .bind(user.role.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        match row {
            Some(row) => row.try_into(),
            None => Err(UserStoreError::RoleNotFound(user.role.code().to_string())),
        }
    }

    #[tracing::instrument(name = "Updating user in PostgreSQL", skip_all, fields(%uuid))]
    async fn update(&self, uuid: Uuid, update: UserUpdate) -> Result<User, UserStoreError> {
        let password_hash = update
            .password_hash
            .as_ref()
            .map(|hash| hash.as_ref().expose_secret().clone());

        let row = sqlx::query_as::<_, UserRow>(concat!(
            "WITH written AS (",
            "UPDATE users SET name = $2, username = $3, email = $4, phone_number = $5, ",
            "password_hash = COALESCE($6, password_hash), updated_at = now() ",
            "WHERE uuid = $1 RETURNING *) ",
            select_user_from!("written")
        ))
        .bind(uuid)
        .bind(&update.name)
        .bind(update.username.as_str())
        .bind(update.email.as_str())
        .bind(&update.phone_number)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        found(row)
    }
}
