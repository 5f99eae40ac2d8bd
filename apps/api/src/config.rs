//! Process Configuration
//!
//! Read once at startup. Missing required values are returned as errors
//! so the caller decides how to shut down, rather than aborting from
//! inside a library call.

use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Postgres connection string for the figure store
    pub database_url: String,
    /// Listening port (PORT, defaults to 8080)
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}
