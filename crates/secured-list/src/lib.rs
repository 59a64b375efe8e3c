//! # Secured List
//!
//! Tamper-evident singly linked list. Each node's digest binds its value to
//! the digest of its successor, so the head digest commits to the whole chain
//! and the chain is anchored at the tail.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure chain logic, no I/O
//!   - `Node`: value, owned successor link, cached digest
//!   - `SecuredList`: prepend, insert, remove, update, tamper scan
//!   - `ListConfig`: configuration with builder and env loading
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `DigestFunction`: Driven port, the pluggable digest
//!
//! - **Adapters Layer** (`adapters/`): Digest implementations
//!   - `Blake3Digest`, `Sha256Digest`: cryptographic
//!   - `SipDigest`: non-cryptographic placeholder
//!
//! ## Security
//!
//! Tamper evidence is only as strong as the supplied digest. With a
//! non-cryptographic digest the list detects accidental corruption, not
//! forgery. Nobody can detect a rewrite that recomputes every upstream digest
//! consistently; the scan only compares cached digests with fresh ones.
//!
//! ## Invariants
//!
//! - On a chain built only through the API, every node's cached digest
//!   equals `digest(value, successor digest or tail sentinel)`
//! - `add` rehashes nothing; `insert(i)` and `remove(i)` rehash exactly the
//!   `i` nodes before the change, tail first
//! - Rehashed nodes are not checked first: a mutation reseals out-of-band
//!   changes in the prefix it recomputes. Run `is_valid_chain` before
//!   mutating when tamper evidence has to survive the mutation
//! - A rejected operation leaves the chain untouched
//!
//! ## Usage Example
//!
//! ```ignore
//! use secured_list::{Blake3Digest, SecuredList};
//!
//! let mut list = SecuredList::new(Blake3Digest::new());
//! list.add("c");
//! list.add("a");
//! list.insert(1, "b")?;
//! assert!(list.is_valid_chain());
//!
//! // Out-of-band write
//! *list.get_mut(2).unwrap().raw_value_mut() = b"forged".to_vec();
//! assert_eq!(list.find_first_tampered().map(|t| t.index), Some(2));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use adapters::{Blake3Digest, Sha256Digest, SipDigest};
pub use domain::{
    IntegrityReport, ListConfig, ListConfigBuilder, Node, OverflowPolicy, SecuredList,
    TamperedNode,
};
pub use error::{ChainError, IndexFault};
pub use metrics::{ChainMetrics, MetricsSnapshot};
pub use ports::{DigestFunction, FnDigest};
pub use shared_crypto::Hash;
