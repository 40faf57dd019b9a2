use sha2::{Digest, Sha256};
use std::fmt;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 digest of an email address.
///
/// The address is treated as opaque text: no syntax validation, no case
/// folding, no trimming. Its UTF-8 bytes are hashed as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmailDigest([u8; DIGEST_LEN]);

impl EmailDigest {
    /// Compute the digest of `email`'s UTF-8 bytes.
    pub fn of(email: &str) -> Self {
        tracing::debug!(len = email.len(), "hashing email address");
        Self(sha256_bytes(email.as_bytes()))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for EmailDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hash an email address and return the 64-character lowercase hex digest.
pub fn hash(email: &str) -> String {
    EmailDigest::of(email).to_hex()
}

fn sha256_bytes(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
