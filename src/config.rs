use std::env;

/// Shortest accepted `SESSION_SECRET`, in bytes.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub session_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://roster.db?mode=rwc".to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let session_secret = lookup("SESSION_SECRET").ok_or(ConfigError::MissingSessionSecret)?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::SessionSecretTooShort);
        }

        Ok(Config {
            database_url,
            database_max_connections,
            server_host,
            server_port,
            session_secret,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SESSION_SECRET environment variable not set")]
    MissingSessionSecret,

    #[error("SESSION_SECRET must be at least 64 bytes long")]
    SessionSecretTooShort,

    #[error("Invalid port number")]
    InvalidPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn secret() -> String {
        "s".repeat(MIN_SESSION_SECRET_LEN)
    }

    #[test]
    fn test_defaults() {
        let secret = secret();
        let config = Config::from_lookup(lookup_from(&[("SESSION_SECRET", &secret)])).unwrap();

        assert_eq!(config.database_url, "sqlite://roster.db?mode=rwc");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.server_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let secret = secret();
        let config = Config::from_lookup(lookup_from(&[
            ("SESSION_SECRET", &secret),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 2);
        assert_eq!(config.server_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_secret() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::MissingSessionSecret)));
    }

    #[test]
    fn test_short_secret() {
        let result = Config::from_lookup(lookup_from(&[("SESSION_SECRET", "too-short")]));
        assert!(matches!(result, Err(ConfigError::SessionSecretTooShort)));
    }

    #[test]
    fn test_invalid_port() {
        let secret = secret();
        let result = Config::from_lookup(lookup_from(&[
            ("SESSION_SECRET", &secret),
            ("SERVER_PORT", "http"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidPort)));
    }
}
