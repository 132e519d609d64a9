//! Process configuration read from the environment at startup.
//!
//! A `.env` file in the working directory is loaded first (see `main.rs`),
//! so local development needs no exported variables beyond `DATABASE_URL`.

use std::str::FromStr;

/// Origin list value that allows any origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Postgres connection string. Required.
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
    /// Allowed CORS origins. A single `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this get a 408.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `9090`                  |
    /// | `DATABASE_URL`         | (required)              |
    /// | `DB_MAX_CONNECTIONS`   | `10`                    |
    /// | `CORS_ORIGINS`         | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    ///
    /// Panics on a missing `DATABASE_URL` or an unparseable value so that a
    /// misconfigured process never starts serving.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parse("PORT", 9090),
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 10),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| ANY_ORIGIN.into()),
            ),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
        }
    }

    /// Whether CORS should accept requests from every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
