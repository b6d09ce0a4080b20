use todo_core::config::{env_or, parse_env, ConfigError};

/// Database connection settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL.
    pub url: String,
    /// Upper bound on open connections (default: `100`).
    pub max_connections: u32,
    /// Connections kept open while idle (default: `10`).
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
    /// individual `DB_*` variables:
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `user`      |
    /// | `DB_PASSWORD`        | `password`  |
    /// | `DB_NAME`            | `myapp`     |
    /// | `DB_SSLMODE`         | `disable`   |
    /// | `DB_MAX_CONNECTIONS` | `100`       |
    /// | `DB_MIN_CONNECTIONS` | `10`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = resolve_url(std::env::var("DATABASE_URL").ok(), || {
            Ok(build_url(
                &env_or("DB_HOST", "localhost"),
                parse_env("DB_PORT", 5432u16)?,
                &env_or("DB_USER", "user"),
                &env_or("DB_PASSWORD", "password"),
                &env_or("DB_NAME", "myapp"),
                &env_or("DB_SSLMODE", "disable"),
            ))
        })?;

        Ok(Self {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS", 100)?,
            min_connections: parse_env("DB_MIN_CONNECTIONS", 10)?,
        })
    }
}

/// Pick the connection URL: a non-empty `database_url` wins, otherwise
/// `from_parts` builds one.
pub fn resolve_url<F>(database_url: Option<String>, from_parts: F) -> Result<String, ConfigError>
where
    F: FnOnce() -> Result<String, ConfigError>,
{
    match database_url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => from_parts(),
    }
}

/// Assemble a `postgres://` URL from its parts.
pub fn build_url(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    name: &str,
    sslmode: &str,
) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}?sslmode={sslmode}")
}
