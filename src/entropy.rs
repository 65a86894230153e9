//! Injectable salt entropy.
//!
//! The random value mixed into the salt exists purely to defeat
//! precomputation of salt hashes; it is not security-critical beyond
//! adding entropy. Making the source a trait keeps generation
//! deterministic under test.

use rand::Rng;

/// Source of the random value folded into each salt.
pub trait SaltEntropy: Send + Sync {
    /// A uniform random integer in `1..=upper`.
    fn salt_value(&self, upper: u32) -> u32;
}

/// Thread-local RNG backed entropy, the production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngEntropy;

impl SaltEntropy for ThreadRngEntropy {
    fn salt_value(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(1..=upper.max(1))
    }
}

/// Entropy pinned to a fixed value, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub u32);

impl SaltEntropy for FixedEntropy {
    fn salt_value(&self, _upper: u32) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_in_range() {
        let entropy = ThreadRngEntropy;
        for _ in 0..100 {
            let value = entropy.salt_value(102_400);
            assert!((1..=102_400).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_upper_bound() {
        assert_eq!(ThreadRngEntropy.salt_value(1), 1);
        assert_eq!(ThreadRngEntropy.salt_value(0), 1);
    }

    #[test]
    fn test_fixed_entropy() {
        assert_eq!(FixedEntropy(42).salt_value(102_400), 42);
    }
}
