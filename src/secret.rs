//! Shared-secret material and secret generation.
//!
//! A secret is either a single string or an ordered sequence rotated by
//! time of day. The material is zeroized on drop and redacted from debug
//! output.

use crate::digest::sha224_hex;
use crate::error::TokenError;
use crate::rotation::select_rotated;
use chrono::Utc;
use rand::Rng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Symmetric secret configuration for a token engine.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub enum Secret {
    /// One fixed secret, used for every token.
    Single(String),
    /// Ordered secrets rotated across the 24-hour clock.
    Rotating(Vec<String>),
}

impl Secret {
    /// The secret in effect at the given Unix timestamp.
    ///
    /// A single secret is always in effect; a rotating set dispatches to
    /// time-of-day bucket selection.
    #[must_use]
    pub fn active(&self, timestamp: i64) -> &str {
        match self {
            Secret::Single(secret) => secret,
            Secret::Rotating(secrets) => select_rotated(secrets, timestamp),
        }
    }

    /// Parses a comma-delimited secret list, the line format of a secrets
    /// file.
    ///
    /// A single entry becomes [`Secret::Single`]; several become
    /// [`Secret::Rotating`] in file order.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] when the input holds no non-empty
    /// entry - an empty secrets source is a setup failure, not something
    /// to paper over with a default.
    pub fn from_delimited(input: &str) -> Result<Self, TokenError> {
        let entries: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        match entries.len() {
            0 => Err(TokenError::config("secrets source is empty")),
            1 => Ok(Secret::Single(entries.into_iter().next().unwrap_or_default())),
            _ => Ok(Secret::Rotating(entries)),
        }
    }

    /// Number of configured secrets.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Secret::Single(_) => 1,
            Secret::Rotating(secrets) => secrets.len(),
        }
    }

    /// True when no usable secret material is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Secret::Single(secret) => secret.is_empty(),
            Secret::Rotating(secrets) => secrets.is_empty(),
        }
    }
}

impl Default for Secret {
    fn default() -> Self {
        Secret::Single(String::new())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Single(_) => f.write_str("Secret::Single(<redacted>)"),
            Secret::Rotating(secrets) => {
                write!(f, "Secret::Rotating({} x <redacted>)", secrets.len())
            }
        }
    }
}

impl From<&str> for Secret {
    fn from(secret: &str) -> Self {
        Secret::Single(secret.to_string())
    }
}

impl From<String> for Secret {
    fn from(secret: String) -> Self {
        Secret::Single(secret)
    }
}

impl From<Vec<String>> for Secret {
    fn from(secrets: Vec<String>) -> Self {
        Secret::Rotating(secrets)
    }
}

/// Generates one fresh 56-character secret from per-call randomness and
/// the current timestamp. The entropy source is not hardened; these
/// secrets are as strong as the process RNG.
#[must_use]
pub fn generate_secret() -> String {
    let random: u64 = rand::thread_rng().gen();
    let timestamp = Utc::now().timestamp();
    sha224_hex(&format!("{random}{timestamp}"))
}

/// Generates `count` secrets via repeated independent calls, suitable for
/// seeding a rotating set.
#[must_use]
pub fn generate_secrets(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_secret()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::DIGEST_LEN;
    use std::collections::HashSet;

    #[test]
    fn test_single_always_active() {
        let secret = Secret::Single("s1".to_string());
        assert_eq!(secret.active(0), "s1");
        assert_eq!(secret.active(1_700_000_000), "s1");
    }

    #[test]
    fn test_from_delimited_single() {
        let secret = Secret::from_delimited("only-one").unwrap();
        assert!(matches!(secret, Secret::Single(ref s) if s == "only-one"));
    }

    #[test]
    fn test_from_delimited_rotating_preserves_order() {
        let secret = Secret::from_delimited("a, b ,c,d").unwrap();
        match secret {
            Secret::Rotating(ref secrets) => assert_eq!(secrets, &["a", "b", "c", "d"]),
            Secret::Single(_) => panic!("expected rotating secret"),
        }
    }

    #[test]
    fn test_from_delimited_empty_is_config_error() {
        assert!(matches!(
            Secret::from_delimited(""),
            Err(TokenError::Config(_))
        ));
        assert!(matches!(
            Secret::from_delimited(" , ,"),
            Err(TokenError::Config(_))
        ));
    }

    #[test]
    fn test_debug_redacts_material() {
        let secret = Secret::Single("super-secret".to_string());
        assert!(!format!("{secret:?}").contains("super-secret"));

        let secret = Secret::Rotating(vec!["alpha".to_string(), "beta".to_string()]);
        let debug = format!("{secret:?}");
        assert!(debug.contains('2'));
        assert!(!debug.contains("alpha"));
    }

    #[test]
    fn test_generate_secret_shape() {
        let secret = generate_secret();
        assert_eq!(secret.len(), DIGEST_LEN);
        assert!(secret.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_secrets_distinct() {
        let secrets = generate_secrets(8);
        assert_eq!(secrets.len(), 8);
        let unique: HashSet<&String> = secrets.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_generate_secrets_zero() {
        assert!(generate_secrets(0).is_empty());
    }
}
