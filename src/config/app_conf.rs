use std::env;
use tracing::warn;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT").or_else(|_| env::var("APP_PORT")) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value '{}', using default: 5000", raw);
                5000
            }),
            Err(_) => 5000,
        };
        AppConfig { host, port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}
