//! Outbound Ports (Driven Ports)
//!
//! The secured list never picks a digest algorithm itself. Every node digest
//! is produced through [`DigestFunction`], supplied by the embedding
//! application.
//!
//! ## Security
//!
//! Tamper-evidence is exactly as strong as the collision resistance of the
//! supplied function. A non-cryptographic function only catches accidental
//! corruption; an adversary can forge values that collide with it.

use shared_crypto::Hash;

/// Deterministic digest binding a node's value to its successor's digest.
///
/// `successor` is `None` for the tail node. Implementations must encode the
/// tail case distinctly from every possible successor digest (the sentinel),
/// and must return the same output for the same inputs on every call.
pub trait DigestFunction {
    /// Compute the digest for `value` linked in front of `successor`.
    fn digest(&self, value: &[u8], successor: Option<&Hash>) -> Hash;

    /// Whether the function is collision resistant against an adversary.
    ///
    /// Lists built with a function reporting `false` log a warning at
    /// construction.
    fn is_cryptographic(&self) -> bool {
        true
    }
}

/// Adapter turning a plain closure into a [`DigestFunction`].
///
/// ```ignore
/// let digest = FnDigest::new(|value: &[u8], successor: Option<&Hash>| {
///     my_hash(value, successor)
/// });
/// ```
#[derive(Clone, Copy)]
pub struct FnDigest<F> {
    f: F,
}

impl<F> FnDigest<F>
where
    F: Fn(&[u8], Option<&Hash>) -> Hash,
{
    /// Wrap `f`. The closure is treated as cryptographic.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> DigestFunction for FnDigest<F>
where
    F: Fn(&[u8], Option<&Hash>) -> Hash,
{
    fn digest(&self, value: &[u8], successor: Option<&Hash>) -> Hash {
        (self.f)(value, successor)
    }
}

impl<D: DigestFunction + ?Sized> DigestFunction for Box<D> {
    fn digest(&self, value: &[u8], successor: Option<&Hash>) -> Hash {
        (**self).digest(value, successor)
    }

    fn is_cryptographic(&self) -> bool {
        (**self).is_cryptographic()
    }
}
