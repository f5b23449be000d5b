/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://pets.db`).
    pub database_url: String,
    /// Pool size (default: `1`, a single connection shared by all requests).
    pub db_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

/// A configuration variable was set to a value that does not parse.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default            |
    /// |----------------------------|--------------------|
    /// | `HOST`                     | `0.0.0.0`          |
    /// | `PORT`                     | `3000`             |
    /// | `DATABASE_URL`             | `sqlite://pets.db` |
    /// | `DATABASE_MAX_CONNECTIONS` | `1`                |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", "3000")?;
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://pets.db".into());
        let db_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", "1")?;
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30")?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            request_timeout_secs,
        })
    }
}

fn parse_var<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(var).unwrap_or_else(|_| default.into());
    value.parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}
