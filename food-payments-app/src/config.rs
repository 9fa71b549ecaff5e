//! Configuration loading from environment.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub orders_api_url: String,
    pub customers_api_url: String,
    pub pix_api_url: String,
    pub pix_api_token: String,
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} environment variable is required", name))
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        Ok(Self {
            port,
            database_url: required("DATABASE_URL")?,
            orders_api_url: required("ORDERS_API_URL")?,
            customers_api_url: required("CUSTOMERS_API_URL")?,
            pix_api_url: required("PIX_API_URL")?,
            pix_api_token: required("PIX_API_TOKEN")?,
        })
    }
}
