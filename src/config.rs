use std::env;
use anyhow::{Context, Result};

/// SQLite file backing the service. Relative to the working directory.
pub const DATABASE_FILE: &str = "cat_facts.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            database_path: DATABASE_FILE.to_string(),
            service_port,
            service_host,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database file: {}", self.database_path);
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
