//! Email digest type, SHA-256 hashing and the digest file writer.

mod digest;
mod error;
mod writer;

pub use digest::{DIGEST_LEN, EmailDigest, hash};
pub use error::EmailHashError;
pub use writer::{DEFAULT_OUTPUT_FILE, write};
