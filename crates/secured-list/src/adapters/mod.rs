//! Adapters Layer - Digest implementations
//!
//! - `Blake3Digest`: default, cryptographic (optionally keyed)
//! - `Sha256Digest`: cryptographic
//! - `SipDigest`: non-cryptographic placeholder for tests and casual corruption checks

pub mod digest;

pub use digest::{Blake3Digest, Sha256Digest, SipDigest};
