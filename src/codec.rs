//! Token wire codec.
//!
//! The token is the plain concatenation of three fields: a 56-character
//! salt hash, a 56-character signature hash, and a variable-length decimal
//! Unix-seconds timestamp (no sign, no leading zero beyond `"0"` itself).
//! The codec is a swappable strategy so alternate field layouts can be
//! substituted without touching the engine.

use crate::digest::DIGEST_LEN;
use crate::error::TokenError;

/// Minimum structurally valid token length: two digests, no timestamp.
pub const MIN_TOKEN_LEN: usize = DIGEST_LEN * 2;

/// The three decoded fields of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParts {
    /// Hash of the salted canonical signature.
    pub salt_hash: String,
    /// Hash binding salt, signature, timestamp, and secret.
    pub signature_hash: String,
    /// Unix seconds at generation time.
    pub timestamp: i64,
}

/// Serialization strategy for the token wire format.
pub trait TokenCodec: Send + Sync {
    /// Encodes the three fields into a single token string.
    fn serialize(&self, parts: &TokenParts) -> String;

    /// Decodes a token string back into its fields.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Malformed`] when the token does not match the
    /// layout this codec produces.
    fn deserialize(&self, token: &str) -> Result<TokenParts, TokenError>;
}

/// The standard layout: `salt_hash ++ signature_hash ++ timestamp` with no
/// delimiters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLayoutCodec;

impl TokenCodec for FixedLayoutCodec {
    fn serialize(&self, parts: &TokenParts) -> String {
        format!(
            "{}{}{}",
            parts.salt_hash, parts.signature_hash, parts.timestamp
        )
    }

    fn deserialize(&self, token: &str) -> Result<TokenParts, TokenError> {
        // Byte positions are only meaningful on an ASCII string.
        if !token.is_ascii() {
            return Err(TokenError::malformed("token contains non-ASCII bytes"));
        }
        if token.len() < MIN_TOKEN_LEN {
            return Err(TokenError::malformed(format!(
                "token too short: {} < {MIN_TOKEN_LEN}",
                token.len()
            )));
        }

        let salt_hash = &token[..DIGEST_LEN];
        let signature_hash = &token[DIGEST_LEN..MIN_TOKEN_LEN];
        let trailing = &token[MIN_TOKEN_LEN..];

        if trailing.is_empty() || !trailing.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenError::malformed(
                "trailing timestamp is not a non-negative decimal integer",
            ));
        }
        // Exactly one wire form per timestamp: a zero-padded variant would
        // parse to the same integer and re-hash identically, making every
        // token malleable.
        if trailing.len() > 1 && trailing.starts_with('0') {
            return Err(TokenError::malformed("trailing timestamp has a leading zero"));
        }
        let timestamp: i64 = trailing
            .parse()
            .map_err(|_| TokenError::malformed("trailing timestamp out of range"))?;

        Ok(TokenParts {
            salt_hash: salt_hash.to_string(),
            signature_hash: signature_hash.to_string(),
            timestamp,
        })
    }
}
