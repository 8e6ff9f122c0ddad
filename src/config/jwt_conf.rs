use std::env;
use tracing::{debug, error, info, warn};

use crate::config::{env_any, ConfigError};

/// JWT configuration structure
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: String,
    /// Token expiration time in minutes
    pub token_expiration: i64,
    /// JWT issuer (optional)
    pub jwt_issuer: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Expected environment variables:
    /// - JWT_SECRET (or ACCESS_TOKEN_SECRET): secret key for signing tokens (required)
    /// - JWT_TOKEN_EXPIRY: token expiration in minutes (defaults to 60)
    /// - JWT_ISSUER: JWT issuer (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading JWT configuration from environment variables");

        let jwt_secret = env_any(&["JWT_SECRET", "ACCESS_TOKEN_SECRET"])
            .ok_or_else(|| {
                error!("JWT_SECRET environment variable not found");
                ConfigError::EnvVarNotFound("JWT_SECRET".to_string())
            })?;
        debug!("JWT secret loaded (length: {} chars)", jwt_secret.len());

        let token_expiration = env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| {
                warn!("JWT_TOKEN_EXPIRY not set, using default: 60 minutes");
                "60".to_string()
            })
            .parse::<i64>()
            .map_err(|e| {
                error!("Invalid JWT_TOKEN_EXPIRY value: {}", e);
                ConfigError::InvalidValue(format!("JWT_TOKEN_EXPIRY: {}", e))
            })?;

        let jwt_issuer = env::var("JWT_ISSUER").ok();
        if let Some(ref issuer) = jwt_issuer {
            debug!("JWT issuer: {}", issuer);
        }

        let config = JwtConfig {
            jwt_secret,
            token_expiration,
            jwt_issuer,
        };

        config.validate()?;
        info!("JWT configuration loaded successfully");
        Ok(config)
    }

    /// Validate the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            error!("JWT secret cannot be empty");
            return Err(ConfigError::ValidationError("JWT secret cannot be empty".to_string()));
        }

        if self.jwt_secret.len() < 32 {
            error!("JWT secret is too short (minimum 32 characters required)");
            return Err(ConfigError::ValidationError("JWT secret must be at least 32 characters long".to_string()));
        }

        if self.token_expiration <= 0 {
            error!("Token expiration must be greater than 0");
            return Err(ConfigError::ValidationError("Token expiration must be greater than 0".to_string()));
        }

        Ok(())
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig {
            jwt_secret: "test_secret_key_for_jwt_testing_should_be_long_enough_for_security_purposes".to_string(),
            token_expiration: 60,
            jwt_issuer: Some("diagpulse-backend".to_string()),
        }
    }
}
