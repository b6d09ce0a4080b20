//! Environment-variable helpers shared by the server and database config.

/// Startup configuration failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Read `var`, falling back to `default` when unset or empty.
pub fn env_or(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Read and parse `var`, falling back to `default` when unset or empty.
pub fn parse_env<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => match value.parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            }),
        },
        _ => Ok(default),
    }
}
