// Process configuration, read once at startup from the environment

use thiserror::Error;

use crate::auth::token::DEFAULT_TOKEN_TTL_SECONDS;

/// Upper bound on `TOKEN_TTL_SECONDS`: ten years
pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set and non-empty")]
    MissingJwtSecret,
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    /// PostgreSQL connection string; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub token_ttl_seconds: i64,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let token_ttl_seconds = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(ttl) if ttl > 0 && ttl <= MAX_TOKEN_TTL_SECONDS => ttl,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "TOKEN_TTL_SECONDS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        Ok(Self {
            jwt_secret,
            database_url,
            host,
            port,
            token_ttl_seconds,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.database_url, None);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.token_ttl_seconds, 86_400);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgresql://u:p@db:5432/auth"),
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("TOKEN_TTL_SECONDS", "900"),
        ]))
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgresql://u:p@db:5432/auth"));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.token_ttl_seconds, 900);
    }

    #[test]
    fn test_missing_or_blank_secret_is_fatal() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])).unwrap_err(),
            ConfigError::MissingJwtSecret
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[("JWT_SECRET", "  ")])).unwrap_err(),
            ConfigError::MissingJwtSecret
        );
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[("JWT_SECRET", "s"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("TOKEN_TTL_SECONDS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "TOKEN_TTL_SECONDS", .. }));
    }

    #[test]
    fn test_oversized_ttl_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("TOKEN_TTL_SECONDS", "9223372036854775807"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "TOKEN_TTL_SECONDS", .. }));

        let max = MAX_TOKEN_TTL_SECONDS.to_string();
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("TOKEN_TTL_SECONDS", max.as_str()),
        ]))
        .unwrap();
        assert_eq!(config.token_ttl_seconds, MAX_TOKEN_TTL_SECONDS);
    }
}
