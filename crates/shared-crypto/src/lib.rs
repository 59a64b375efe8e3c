//! # Shared Crypto - Digest Primitives
//!
//! ## Components
//!
//! | Function | Algorithm | Use Case |
//! |----------|-----------|----------|
//! | `blake3_hash_many` | BLAKE3 | Default chain digest |
//! | `blake3_keyed_hash_many` | BLAKE3 (keyed) | Chains that must resist re-forging without the key |
//! | `sha256_hash_many` | SHA-256 | Interop with SHA-256 based tooling |
//!
//! All functions return a fixed 256-bit [`Hash`]. Multi-part variants feed
//! each part to the hasher in order without separators, so callers are
//! responsible for framing (length prefixes, tags).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hashing;

// Re-exports
pub use hashing::{blake3_hash_many, blake3_keyed_hash_many, sha256_hash_many, Blake3Hasher, Hash};
