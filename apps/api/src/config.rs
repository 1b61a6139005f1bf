use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if neither catalog source is configured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres catalog. Takes precedence over the seed file when both are set.
    pub database_url: Option<String>,
    /// JSON seed for the in-memory catalog.
    pub activity_seed_path: Option<PathBuf>,
    pub scoring_rules_path: Option<PathBuf>,
    pub store_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            database_url: optional_env("DATABASE_URL"),
            activity_seed_path: optional_env("ACTIVITY_SEED_PATH").map(PathBuf::from),
            scoring_rules_path: optional_env("SCORING_RULES_PATH").map(PathBuf::from),
            store_timeout: Duration::from_millis(
                std::env::var("STORE_TIMEOUT_MS")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse::<u64>()
                    .context("STORE_TIMEOUT_MS must be a number of milliseconds")?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        if config.database_url.is_none() && config.activity_seed_path.is_none() {
            bail!("Either DATABASE_URL or ACTIVITY_SEED_PATH must be set");
        }

        Ok(config)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            database_url: None,
            activity_seed_path: None,
            scoring_rules_path: None,
            store_timeout: Duration::from_millis(500),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
