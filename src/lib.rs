//! Stateless signed-token library.
//!
//! Provides generation and validation of opaque, tamper-evident,
//! time-limited tokens bound to an arbitrary parameter set and a shared
//! symmetric secret, with optional time-of-day secret rotation.
//!
//! The core is pure: the engine holds an immutable configuration plus
//! injectable clock and entropy sources, and every call works only on
//! local values. Loading secrets from disk or wiring tokens into a
//! transport is the caller's concern.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod canonical;
pub mod clock;
pub mod codec;
pub mod config;
pub mod digest;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod rotation;
pub mod secret;

// Re-exports for convenience
pub use canonical::{plain_signature, ParamSet, ParamValue};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{FixedLayoutCodec, TokenCodec, TokenParts};
pub use config::EngineConfig;
pub use engine::TokenEngine;
pub use entropy::{FixedEntropy, SaltEntropy, ThreadRngEntropy};
pub use error::TokenError;
pub use secret::{generate_secret, generate_secrets, Secret};
