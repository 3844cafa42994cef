pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AdminSeedSettings, ApplicationSettings, BootstrapSettings, DatabaseSettings, JwtSettings,
    RateLimiterSettings, Settings,
};
