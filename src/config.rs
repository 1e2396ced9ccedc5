use anyhow::{Result, bail};
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `ORDER_API_URL`: Optional - Base URL of the order API (default: "http://localhost:8080")
    pub fn from_env() -> Result<Self> {
        // Parse API base URL (optional, has default)
        let api_url = match env::var("ORDER_API_URL") {
            Ok(value) => {
                if value.trim().is_empty() {
                    bail!("ORDER_API_URL cannot be empty");
                }
                value
            }
            Err(_) => "http://localhost:8080".to_string(),
        };

        Ok(Config { api_url })
    }
}
