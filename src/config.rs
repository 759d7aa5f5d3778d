use anyhow::Context;
use std::env;

/// Runtime configuration, read once at startup.
///
/// Everything the service needs from the environment lives here so the rest
/// of the code never reaches for `env::var` directly. `DB` and `SECRET_KEY`
/// are required; the rest have sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string.
    pub database_url: String,
    /// Database name within the cluster.
    pub database_name: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// HMAC secret used to sign and verify tokens.
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DB").context("DB must be set to a MongoDB connection string")?;
        let database_name = env::var("DB_NAME").unwrap_or_else(|_| "reelbase".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("PORT must be a valid port number")?;
        let secret_key = env::var("SECRET_KEY").context("SECRET_KEY must be set")?;

        Ok(Self {
            database_url,
            database_name,
            port,
            secret_key,
        })
    }
}
