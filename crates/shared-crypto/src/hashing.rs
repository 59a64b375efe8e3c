//! # Hashing
//!
//! BLAKE3 and SHA-256 digests over one or more byte slices.
//!
//! ## Performance
//!
//! - BLAKE3 is 5-10x faster than SHA-256 and is the default choice
//! - SHA-256 is kept for environments that mandate it

use blake3::Hasher;
use sha2::{Digest, Sha256};

/// 256-bit digest output.
pub type Hash = [u8; 32];

/// Stateful BLAKE3 hasher.
pub struct Blake3Hasher {
    inner: Hasher,
}

impl Blake3Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Hasher::new(),
        }
    }

    /// Create keyed hasher (for MAC).
    pub fn new_keyed(key: &[u8; 32]) -> Self {
        Self {
            inner: Hasher::new_keyed(key),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(&self) -> Hash {
        *self.inner.finalize().as_bytes()
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash multiple inputs.
pub fn blake3_hash_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Blake3Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// Keyed hash (MAC) over multiple inputs.
pub fn blake3_keyed_hash_many(key: &[u8; 32], inputs: &[&[u8]]) -> Hash {
    let mut hasher = Blake3Hasher::new_keyed(key);
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// Hash multiple inputs with SHA-256.
pub fn sha256_hash_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}
