//! Digest adapters implementing [`DigestFunction`].
//!
//! All adapters frame their input identically:
//!
//! ```text
//! tail:  TAIL_TAG || len(value) as u64 LE || value
//! link:  LINK_TAG || len(value) as u64 LE || value || successor_digest
//! ```
//!
//! The tag is the tail sentinel: a tail node can never produce the same
//! preimage as a linked node, and the length prefix keeps value bytes from
//! bleeding into the successor digest.

use std::hash::Hasher;

use shared_crypto::{blake3_hash_many, blake3_keyed_hash_many, sha256_hash_many, Hash};
use siphasher::sip128::{Hasher128, SipHasher13};

use crate::ports::DigestFunction;

// Marker bytes: no successor / linked to a successor
const TAIL_TAG: u8 = 0x00;
const LINK_TAG: u8 = 0x01;

const TAIL_MARK: &[u8] = &[TAIL_TAG];
const LINK_MARK: &[u8] = &[LINK_TAG];

/// Split a node's digest input into framed parts.
fn frame<'a>(value: &'a [u8], successor: Option<&'a Hash>, len: &'a [u8; 8]) -> Vec<&'a [u8]> {
    match successor {
        Some(next) => vec![LINK_MARK, &len[..], value, &next[..]],
        None => vec![TAIL_MARK, &len[..], value],
    }
}

/// BLAKE3 chain digest.
#[derive(Debug, Clone, Default)]
pub struct Blake3Digest {
    key: Option<[u8; 32]>,
}

impl Blake3Digest {
    /// Unkeyed BLAKE3.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyed BLAKE3. Forging a consistent chain requires the key.
    pub fn keyed(key: [u8; 32]) -> Self {
        Self { key: Some(key) }
    }
}

impl DigestFunction for Blake3Digest {
    fn digest(&self, value: &[u8], successor: Option<&Hash>) -> Hash {
        let len = (value.len() as u64).to_le_bytes();
        let parts = frame(value, successor, &len);
        match &self.key {
            Some(key) => blake3_keyed_hash_many(key, &parts),
            None => blake3_hash_many(&parts),
        }
    }
}

/// SHA-256 chain digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl DigestFunction for Sha256Digest {
    fn digest(&self, value: &[u8], successor: Option<&Hash>) -> Hash {
        let len = (value.len() as u64).to_le_bytes();
        sha256_hash_many(&frame(value, successor, &len))
    }
}

/// SipHash-1-3 based placeholder digest.
///
/// **Not collision resistant.** Detects accidental or casual corruption only;
/// anyone able to write to the chain can forge a matching value. Two 128-bit
/// SipHash outputs under fixed keys are concatenated to fill the digest width.
#[derive(Debug, Clone, Copy, Default)]
pub struct SipDigest;

impl SipDigest {
    const KEYS: [(u64, u64); 2] = [
        (0x736f_6d65_7073_6575, 0x646f_7261_6e64_6f6d),
        (0x6c79_6765_6e65_7261, 0x7465_6462_7974_6573),
    ];
}

impl DigestFunction for SipDigest {
    fn digest(&self, value: &[u8], successor: Option<&Hash>) -> Hash {
        let len = (value.len() as u64).to_le_bytes();
        let parts = frame(value, successor, &len);

        let mut out = [0u8; 32];
        for (chunk, (k0, k1)) in out.chunks_exact_mut(16).zip(Self::KEYS) {
            let mut hasher = SipHasher13::new_with_keys(k0, k1);
            for part in &parts {
                hasher.write(part);
            }
            chunk.copy_from_slice(&hasher.finish128().as_bytes());
        }
        out
    }

    fn is_cryptographic(&self) -> bool {
        false
    }
}
