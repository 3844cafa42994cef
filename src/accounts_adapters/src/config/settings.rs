use std::time::Duration;

use accounts_application::SessionSettings;
use config::{
    Config, ConfigError, Environment, File, FileFormat, Source,
    builder::{ConfigBuilder, DefaultState},
};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_CONFIG_FILE, defaults, env};

/// Process settings. Loaded once at startup and handed to constructors; there is no global copy.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    #[serde(default)]
    pub rate_limiter: RateLimiterSettings,
    #[serde(default)]
    pub bootstrap: BootstrapSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub name: String,
    pub env: String,
    pub host: String,
    pub port: u16,
    /// Browser origins granted CORS access. Empty disables the CORS layer.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    pub max_open_connections: u32,
    pub max_idle_connections: u32,
    /// Seconds.
    pub max_lifetime_connection: u64,
    /// Seconds.
    pub max_idle_time: u64,
}

impl DatabaseSettings {
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_connection)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.max_idle_time)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret_key: Secret<String>,
    pub expiration_minutes: i64,
}

impl JwtSettings {
    /// Tokens must outlive their issuance and stay within a year.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = 1..=defaults::MAX_JWT_EXPIRATION_MINUTES;
        if !range.contains(&self.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between {} and {}, got {}",
                range.start(),
                range.end(),
                self.expiration_minutes
            )));
        }
        Ok(())
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::from_minutes(self.expiration_minutes)
    }
}

/// Parsed for compatibility with existing deployments; nothing enforces these limits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateLimiterSettings {
    #[serde(default)]
    pub max_requests: f64,
    #[serde(default)]
    pub time_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootstrapSettings {
    #[serde(default)]
    pub admin: Option<AdminSeedSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminSeedSettings {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password: Secret<String>,
}

impl Settings {
    /// Load from `.env`, the JSON config file and `ACCOUNTS__*` environment variables,
    /// in increasing order of precedence.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }

        let path = std::env::var(env::CONFIG_FILE_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        tracing::info!(path = %path, "loading configuration");

        Self::from_sources(
            File::new(&path, FileFormat::Json).required(false),
            Self::environment(),
        )
    }

    pub fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator(env::ENV_SEPARATOR)
            .separator(env::ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("application.allowed_origins")
    }

    pub fn from_sources<F, E>(file: F, environment: E) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        let settings: Self = with_defaults(Config::builder())?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.jwt.validate()?;

        Ok(settings)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("application.name", defaults::APP_NAME)?
        .set_default("application.env", defaults::APP_ENV)?
        .set_default("application.host", defaults::APP_HOST)?
        .set_default("application.port", i64::from(defaults::APP_PORT))?
        .set_default(
            "database.max_open_connections",
            i64::from(defaults::MAX_OPEN_CONNECTIONS),
        )?
        .set_default(
            "database.max_idle_connections",
            i64::from(defaults::MAX_IDLE_CONNECTIONS),
        )?
        .set_default(
            "database.max_lifetime_connection",
            defaults::MAX_LIFETIME_CONNECTION_SECS as i64,
        )?
        .set_default("database.max_idle_time", defaults::MAX_IDLE_TIME_SECS as i64)?
        .set_default("jwt.expiration_minutes", defaults::JWT_EXPIRATION_MINUTES)
}
