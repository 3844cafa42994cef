pub mod env {
    pub const CONFIG_FILE_ENV_VAR: &str = "ACCOUNTS_CONFIG_FILE";
    pub const ENV_PREFIX: &str = "ACCOUNTS";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const API_PREFIX: &str = "/api/v1/auth";

pub mod defaults {
    pub const APP_NAME: &str = "accounts-service";
    pub const APP_ENV: &str = "development";
    pub const APP_HOST: &str = "0.0.0.0";
    pub const APP_PORT: u16 = 8001;

    pub const MAX_OPEN_CONNECTIONS: u32 = 10;
    pub const MAX_IDLE_CONNECTIONS: u32 = 5;
    pub const MAX_LIFETIME_CONNECTION_SECS: u64 = 3600;
    pub const MAX_IDLE_TIME_SECS: u64 = 600;

    pub const JWT_EXPIRATION_MINUTES: i64 = 60;
    /// One year.
    pub const MAX_JWT_EXPIRATION_MINUTES: i64 = 60 * 24 * 365;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
