use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for services that guard routes with API keys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub host: String,
    pub port: u16,
    /// Attach `details` to rejection bodies
    pub debug_mode: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            debug_mode: false,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: match env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid PORT value"))?,
                Err(_) => defaults.port,
            },
            debug_mode: env::var("DEBUG_AUTH").unwrap_or_default() == "true",
        })
    }
}
