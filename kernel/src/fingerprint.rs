//! Layout identity fingerprints.
//!
//! Dedup keys for the search layer are domain-separated SHA-256 digests of a
//! layout's identity bytes. The domain prefix is null-terminated so distinct
//! content kinds can never collide byte-for-byte with layout identities.
//!
//! **Exactly one place defines identity hashing** — every map that keys on
//! "the same sequence of values" goes through this module.

use sha2::{Digest, Sha256};

/// Domain prefix for layout identity hashing.
pub const DOMAIN_LAYOUT_IDENTITY: &[u8] = b"SWAPCOST::LAYOUT_IDENTITY::V1\0";

/// A 32-byte identity digest.
///
/// `Copy` on purpose: fingerprints are hot-path map keys and get cached on
/// every search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering of the digest.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.hex_digest())
    }
}

/// Compute the fingerprint of `data` under a domain prefix.
///
/// The prefix must include its null terminator (the `DOMAIN_*` constants in
/// this module already do).
#[must_use]
pub fn fingerprint(domain: &[u8], data: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    Fingerprint(hasher.finalize().into())
}
