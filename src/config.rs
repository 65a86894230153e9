//! Engine configuration.
//!
//! Configuration is immutable once built: reconfiguring (for example to
//! deploy a new secret set) means constructing a new engine, never
//! mutating one that is in use.

use crate::error::TokenError;
use crate::secret::Secret;
use std::env;

/// Default token lifetime in seconds.
pub const DEFAULT_EXPIRY_SECONDS: i64 = 300;
/// Default upper bound for the random salt value.
pub const DEFAULT_RANDOM_RANGE: u32 = 102_400;

/// Immutable configuration for a [`crate::TokenEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Shared secret material.
    pub secret: Secret,
    /// Seconds before a token's embedded timestamp counts as expired.
    pub expiry_seconds: i64,
    /// Upper bound (inclusive) of the random value mixed into each salt.
    pub random_range: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            secret: Secret::default(),
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
            random_range: DEFAULT_RANDOM_RANGE,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given secret and default expiry and
    /// salt range.
    #[must_use]
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Set the secret material.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<Secret>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Set the expiry window in seconds.
    #[must_use]
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.expiry_seconds = seconds;
        self
    }

    /// Set the inclusive upper bound for the random salt value.
    #[must_use]
    pub fn with_random_range(mut self, upper: u32) -> Self {
        self.random_range = upper;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `TOKEN_SECRETS` is a comma-delimited secret list (the same line
    /// format as a secrets file); `TOKEN_EXPIRY_SECONDS` and
    /// `TOKEN_RANDOM_RANGE` override the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but invalid, including
    /// a `TOKEN_SECRETS` that parses to no secrets at all.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let secret = match env::var("TOKEN_SECRETS") {
            Ok(raw) => Secret::from_delimited(&raw)?,
            Err(_) => Secret::default(),
        };
        let expiry_seconds = parse_env("TOKEN_EXPIRY_SECONDS", DEFAULT_EXPIRY_SECONDS)?;
        let random_range = parse_env("TOKEN_RANDOM_RANGE", DEFAULT_RANDOM_RANGE)?;

        Ok(Self {
            secret,
            expiry_seconds,
            random_range,
        })
    }
}

/// Parse environment variable with default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, TokenError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {name}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.expiry_seconds, 300);
        assert_eq!(config.random_range, 102_400);
        assert!(config.secret.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new("s1")
            .with_expiry_seconds(60)
            .with_random_range(512);
        assert_eq!(config.expiry_seconds, 60);
        assert_eq!(config.random_range, 512);
        assert_eq!(config.secret.active(0), "s1");
    }

    #[test]
    fn test_rotating_secret_builder() {
        let config = EngineConfig::default()
            .with_secret(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(config.secret.len(), 2);
    }
}
