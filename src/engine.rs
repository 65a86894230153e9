//! Token generation and validation.
//!
//! The engine orchestrates the canonicalizer, the codec, and the secret
//! material. It holds no per-call state: `generate` and `validate` are
//! safe to invoke concurrently, and two engines built from the same
//! configuration accept each other's tokens.

use crate::canonical::{plain_signature, ParamSet};
use crate::clock::{Clock, SystemClock};
use crate::codec::{FixedLayoutCodec, TokenCodec, TokenParts};
use crate::config::EngineConfig;
use crate::digest::sha224_hex;
use crate::entropy::{SaltEntropy, ThreadRngEntropy};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Stateless token signer and verifier.
pub struct TokenEngine<C: TokenCodec = FixedLayoutCodec> {
    config: EngineConfig,
    codec: C,
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn SaltEntropy>,
}

impl TokenEngine<FixedLayoutCodec> {
    /// Create an engine with the standard fixed-layout codec.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_codec(config, FixedLayoutCodec)
    }
}

impl<C: TokenCodec> TokenEngine<C> {
    /// Create an engine with an alternate codec strategy.
    #[must_use]
    pub fn with_codec(config: EngineConfig, codec: C) -> Self {
        Self {
            config,
            codec,
            clock: Arc::new(SystemClock),
            entropy: Arc::new(ThreadRngEntropy),
        }
    }

    /// Replace the time source, primarily for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the salt entropy source, primarily for deterministic tests.
    #[must_use]
    pub fn with_entropy(mut self, entropy: Arc<dyn SaltEntropy>) -> Self {
        self.entropy = entropy;
        self
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates a token over the given parameter set.
    ///
    /// The salt hash covers the canonical signature, a random value, and
    /// the timestamp; the signature hash then binds the salt hash, the
    /// signature, the timestamp, and the active secret together, so no
    /// field can be replayed against a different timestamp or secret.
    /// Never fails under a well-formed configuration.
    #[must_use]
    pub fn generate(&self, params: &ParamSet) -> String {
        let signature = plain_signature(params);
        let timestamp = self.clock.now_unix();
        let random_value = self.entropy.salt_value(self.config.random_range);

        let salt_hash = sha224_hex(&format!("{signature}{random_value}{timestamp}"));
        let signature_hash = self.signature_hash(&signature, &salt_hash, timestamp);

        self.codec.serialize(&TokenParts {
            salt_hash,
            signature_hash,
            timestamp,
        })
    }

    /// Checks a token against the parameter set it claims to sign.
    ///
    /// Total predicate: every failure - malformed token, expiry, hash
    /// mismatch - collapses to `false`. The return value never reveals
    /// which check rejected the token.
    #[must_use]
    pub fn validate(&self, token: &str, params: &ParamSet) -> bool {
        let parts = match self.codec.deserialize(token) {
            Ok(parts) => parts,
            Err(err) => {
                debug!(error = %err, "rejected structurally invalid token");
                return false;
            }
        };

        if self.has_expired(parts.timestamp) {
            debug!(timestamp = parts.timestamp, "rejected expired token");
            return false;
        }

        let signature = plain_signature(params);
        let expected = self.signature_hash(&signature, &parts.salt_hash, parts.timestamp);
        let matches: bool = expected
            .as_bytes()
            .ct_eq(parts.signature_hash.as_bytes())
            .into();
        if !matches {
            debug!("rejected token with mismatched signature hash");
        }
        matches
    }

    /// Recomputes the signature hash for a salt hash and timestamp using
    /// the secret active at that timestamp.
    fn signature_hash(&self, signature: &str, salt_hash: &str, timestamp: i64) -> String {
        let secret = self.config.secret.active(timestamp);
        sha224_hex(&format!("{salt_hash}{signature}{timestamp}{secret}"))
    }

    fn has_expired(&self, timestamp: i64) -> bool {
        self.clock.now_unix() - self.config.expiry_seconds > timestamp
    }
}
