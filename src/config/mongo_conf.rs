use bson::doc;
use mongodb::{options::{ClientOptions, Credential, ResolverConfig}, Client, Database};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::{env_any, ConfigError};

/// MongoDB configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Username for authentication (optional)
    pub username: Option<String>,
    /// Password for authentication (optional)
    pub password: Option<String>,
    /// Connection pool size
    pub pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl MongoConfig {
    /// Load MongoDB configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MONGO_URI: MongoDB connection URI (required)
    /// - MONGO_DATABASE: Database name (defaults to diagPulseDB)
    /// - MONGO_USERNAME / DB_USER: username (optional)
    /// - MONGO_PASSWORD / DB_PASS: password (optional)
    /// - MONGO_POOL_SIZE: Connection pool size (defaults to 10)
    /// - MONGO_CONNECTION_TIMEOUT: Connection timeout in seconds (defaults to 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading MongoDB configuration from environment variables");

        let uri = env::var("MONGO_URI")
            .map_err(|_| {
                error!("MONGO_URI environment variable not found");
                ConfigError::EnvVarNotFound("MONGO_URI".to_string())
            })?;

        let database = env::var("MONGO_DATABASE").unwrap_or_else(|_| {
            warn!("MONGO_DATABASE not set, using default: diagPulseDB");
            "diagPulseDB".to_string()
        });
        debug!("MongoDB database: {}", database);

        let username = env_any(&["MONGO_USERNAME", "DB_USER"]);
        let password = env_any(&["MONGO_PASSWORD", "DB_PASS"]);
        match (&username, &password) {
            (Some(user), Some(_)) => debug!("MongoDB credentials provided for user: {}", user),
            (None, None) => debug!("No MongoDB credentials specified"),
            _ => warn!("Only one of MongoDB username/password is set, credentials will be ignored"),
        }

        let pool_size = env::var("MONGO_POOL_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|_| {
                error!("Invalid MONGO_POOL_SIZE value");
                ConfigError::InvalidValue("Invalid MONGO_POOL_SIZE value".to_string())
            })?;

        let connection_timeout_secs = env::var("MONGO_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid MONGO_CONNECTION_TIMEOUT value");
                ConfigError::InvalidValue("Invalid MONGO_CONNECTION_TIMEOUT value".to_string())
            })?;
        debug!("MongoDB pool size: {}, timeout: {}s", pool_size, connection_timeout_secs);

        let config = MongoConfig {
            uri,
            database,
            username,
            password,
            pool_size,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("MongoDB configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.is_empty() {
            error!("MongoDB URI is empty");
            return Err(ConfigError::ValidationError("MongoDB URI cannot be empty".to_string()));
        }

        if self.database.is_empty() {
            error!("MongoDB database is empty");
            return Err(ConfigError::ValidationError("MongoDB database cannot be empty".to_string()));
        }

        if self.pool_size == 0 {
            error!("MongoDB pool size is 0");
            return Err(ConfigError::ValidationError("MongoDB pool size must be greater than 0".to_string()));
        }

        if self.connection_timeout_secs == 0 {
            error!("MongoDB connection timeout is 0");
            return Err(ConfigError::ValidationError("MongoDB connection timeout must be greater than 0".to_string()));
        }

        if let Some(ref user) = self.username {
            if user.is_empty() {
                return Err(ConfigError::ValidationError("MongoDB username cannot be empty if set".to_string()));
            }
        }
        if let Some(ref pass) = self.password {
            if pass.is_empty() {
                return Err(ConfigError::ValidationError("MongoDB password cannot be empty if set".to_string()));
            }
        }
        Ok(())
    }

    /// Opens the process-wide client and returns the application database.
    ///
    /// The returned handle is cheap to clone and shares one connection pool;
    /// every repository is built from it.
    pub async fn connect(&self) -> Result<Database, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse_with_resolver_config(&self.uri, ResolverConfig::cloudflare()).await?;
        client_options.app_name = Some("DiagPulseBackend".to_string());
        client_options.max_pool_size = Some(self.pool_size);
        client_options.connect_timeout = Some(std::time::Duration::from_secs(self.connection_timeout_secs));

        if let (Some(ref username), Some(ref password)) = (&self.username, &self.password) {
            client_options.credential = Some(Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build());
        }

        let client = Client::with_options(client_options)?;
        client.database("admin").run_command(doc! { "ping": 1 }, None).await?;
        info!("Pinged MongoDB deployment, connection established");
        Ok(client.database(&self.database))
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "diagPulseDB".to_string(),
            username: None,
            password: None,
            pool_size: 10,
            connection_timeout_secs: 5,
        }
    }
}
