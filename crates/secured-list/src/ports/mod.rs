//! Ports Layer - Trait definitions
//!
//! - `outbound`: the digest function the chain depends on (driven port)

pub mod outbound;

pub use outbound::{DigestFunction, FnDigest};
