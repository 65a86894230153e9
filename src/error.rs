//! Error types for token signing and configuration.
//!
//! Only two situations surface as errors: a token that does not match the
//! wire shape (returned by codec deserialization) and invalid setup-time
//! configuration. `TokenEngine::validate` never propagates either - it
//! collapses every failure to `false` so callers cannot distinguish a
//! malformed token from an expired or forged one.

use thiserror::Error;

/// Errors produced by the token signing library.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token does not match the fixed-layout wire shape.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Invalid configuration supplied at setup time.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a malformed-token error.
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        TokenError::Malformed(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        TokenError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenError::malformed("token too short: 10 < 112");
        assert_eq!(err.to_string(), "malformed token: token too short: 10 < 112");

        let err = TokenError::config("no secrets configured");
        assert_eq!(err.to_string(), "configuration error: no secrets configured");
    }
}
