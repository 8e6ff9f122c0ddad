use std::env;
use tracing::{debug, error, info};

use crate::config::ConfigError;

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_live_... / sk_test_...)
    pub secret_key: String,
    /// Base URL of the Stripe REST API
    pub api_base: String,
    /// ISO currency code intents are created in
    pub currency: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StripeConfig {
    /// Load Stripe configuration from environment variables
    ///
    /// Expected environment variables:
    /// - STRIPE_SECRET_KEY: secret API key (required)
    /// - STRIPE_API_BASE: API base URL (defaults to https://api.stripe.com)
    /// - STRIPE_CURRENCY: currency code (defaults to usd)
    /// - STRIPE_TIMEOUT: request timeout in seconds (defaults to 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading Stripe configuration from environment variables");

        let secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| {
            error!("STRIPE_SECRET_KEY environment variable not found");
            ConfigError::EnvVarNotFound("STRIPE_SECRET_KEY".to_string())
        })?;

        let defaults = StripeConfig::default();
        let api_base = env::var("STRIPE_API_BASE").unwrap_or(defaults.api_base);
        let currency = env::var("STRIPE_CURRENCY").unwrap_or(defaults.currency);
        let timeout_secs = match env::var("STRIPE_TIMEOUT") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                error!("Invalid STRIPE_TIMEOUT value");
                ConfigError::InvalidValue("Invalid STRIPE_TIMEOUT value".to_string())
            })?,
            Err(_) => defaults.timeout_secs,
        };
        debug!("Stripe API base: {}, currency: {}", api_base, currency);

        let config = StripeConfig {
            secret_key,
            api_base,
            currency,
            timeout_secs,
        };
        config.validate()?;
        info!("Stripe configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.secret_key.starts_with("sk_") {
            error!("STRIPE_SECRET_KEY does not look like a secret key");
            return Err(ConfigError::ValidationError("Stripe secret key must start with sk_".to_string()));
        }
        if self.currency.len() != 3 {
            return Err(ConfigError::ValidationError(format!("Invalid currency code: {}", self.currency)));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError("Stripe timeout must be greater than 0".to_string()));
        }
        Ok(())
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        StripeConfig {
            secret_key: "sk_test_placeholder".to_string(),
            api_base: "https://api.stripe.com".to_string(),
            currency: "usd".to_string(),
            timeout_secs: 10,
        }
    }
}
