use crate::error::CoreError;
use crate::key::ShortKey;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept by default, giving 16 hex characters.
pub const DEFAULT_PREFIX_LEN: usize = 8;
pub const MIN_PREFIX_LEN: usize = 1;
/// SHA-256 output size in bytes.
pub const MAX_PREFIX_LEN: usize = 32;

/// Trait for deriving short keys from values.
///
/// Implementations are pure functions of their input: the same bytes always
/// produce the same key, and generation never fails. Storage concerns such
/// as collisions are left to the caller.
pub trait KeyGenerator: Send + Sync + 'static {
    fn generate(&self, value: &[u8]) -> ShortKey;
}

/// Derives keys from a truncated SHA-256 digest encoded as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestKeyGenerator {
    prefix_len: usize,
}

impl DigestKeyGenerator {
    /// Creates a generator keeping the first `prefix_len` digest bytes.
    ///
    /// Valid lengths are `1..=32`.
    pub fn new(prefix_len: usize) -> Result<Self, CoreError> {
        if !(MIN_PREFIX_LEN..=MAX_PREFIX_LEN).contains(&prefix_len) {
            return Err(CoreError::InvalidPrefixLength {
                len: prefix_len,
                min: MIN_PREFIX_LEN,
                max: MAX_PREFIX_LEN,
            });
        }

        Ok(Self { prefix_len })
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// Length of every key this generator produces, in hex characters.
    pub fn key_len(&self) -> usize {
        self.prefix_len * 2
    }
}

impl Default for DigestKeyGenerator {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
        }
    }
}

impl KeyGenerator for DigestKeyGenerator {
    fn generate(&self, value: &[u8]) -> ShortKey {
        let digest = Sha256::digest(value);
        ShortKey::new_unchecked(hex::encode(&digest[..self.prefix_len]))
    }
}
