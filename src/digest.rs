//! Hash primitive shared by salting, signing, and secret generation.

use sha2::{Digest, Sha224};

/// Number of hex characters in a SHA-224 digest.
pub const DIGEST_LEN: usize = 56;

/// Computes the SHA-224 digest of the input's UTF-8 bytes as a 56-character
/// lowercase hex string.
#[must_use]
pub fn sha224_hex(input: &str) -> String {
    let hash = Sha224::digest(input.as_bytes());
    hex::encode(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_length_and_charset() {
        let digest = sha224_hex("blah123");
        assert_eq!(digest.len(), DIGEST_LEN);
        assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_digest_deterministic() {
        assert_eq!(sha224_hex("input"), sha224_hex("input"));
        assert_ne!(sha224_hex("input"), sha224_hex("inpux"));
    }

    #[test]
    fn test_known_vector() {
        // SHA-224 of the empty string
        assert_eq!(
            sha224_hex(""),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }
}
