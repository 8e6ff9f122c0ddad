pub mod mongo_conf;
pub mod jwt_conf;
pub mod stripe_conf;
pub mod admin_user_conf;
pub mod app_conf;

pub use mongo_conf::MongoConfig;
pub use jwt_conf::JwtConfig;
pub use stripe_conf::StripeConfig;
pub use admin_user_conf::AdminUserConfig;
pub use app_conf::AppConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Reads the first variable that is set among `names`.
pub(crate) fn env_any(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| std::env::var(name).ok())
}
