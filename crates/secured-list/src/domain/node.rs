//! Chain node
//!
//! A node owns its successor outright (`Option<Box<Node>>`), so the chain is
//! strictly forward and cannot contain cycles. Its cached digest commits to
//! its own value and to the successor's cached digest, or to the tail
//! sentinel when there is no successor.

use std::fmt;

use shared_crypto::Hash;

use crate::ports::DigestFunction;

/// A single element of a [`SecuredList`](crate::SecuredList).
pub struct Node {
    pub(crate) value: Vec<u8>,
    pub(crate) successor: Option<Box<Node>>,
    pub(crate) digest: Hash,
}

impl Node {
    /// Create a node in front of `successor`, computing its digest immediately.
    pub fn new<D>(value: Vec<u8>, successor: Option<Box<Node>>, digest_fn: &D) -> Self
    where
        D: DigestFunction + ?Sized,
    {
        let digest = Self::compute_digest(
            digest_fn,
            &value,
            successor.as_deref().map(|next| &next.digest),
        );
        Self {
            value,
            successor,
            digest,
        }
    }

    /// Digest of `value` bound to `successor_digest`, or to the tail sentinel
    /// when `None`.
    pub fn compute_digest<D>(digest_fn: &D, value: &[u8], successor_digest: Option<&Hash>) -> Hash
    where
        D: DigestFunction + ?Sized,
    {
        digest_fn.digest(value, successor_digest)
    }

    fn fresh_digest<D>(&self, digest_fn: &D) -> Hash
    where
        D: DigestFunction + ?Sized,
    {
        Self::compute_digest(
            digest_fn,
            &self.value,
            self.successor.as_deref().map(|next| &next.digest),
        )
    }

    /// Refresh the cached digest from the current value and successor.
    ///
    /// Touches only this node. Callers changing a chain must recompute
    /// predecessors afterwards, tail first.
    pub fn recompute<D>(&mut self, digest_fn: &D)
    where
        D: DigestFunction + ?Sized,
    {
        self.digest = self.fresh_digest(digest_fn);
    }

    /// Whether the cached digest matches a fresh computation.
    ///
    /// Local check only: a valid node says nothing about nodes after it.
    pub fn is_valid<D>(&self, digest_fn: &D) -> bool
    where
        D: DigestFunction + ?Sized,
    {
        self.digest == self.fresh_digest(digest_fn)
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// The value as UTF-8, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    pub fn digest(&self) -> &Hash {
        &self.digest
    }

    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    pub fn successor(&self) -> Option<&Node> {
        self.successor.as_deref()
    }

    /// Mutable access to the value that bypasses rehashing.
    ///
    /// Anything written here leaves the cached digest stale, and the chain
    /// reports this node as tampered until it is rebuilt through the list API.
    pub fn raw_value_mut(&mut self) -> &mut Vec<u8> {
        &mut self.value
    }

    /// Mutable access to the successor link that bypasses rehashing.
    pub fn raw_successor_mut(&mut self) -> &mut Option<Box<Node>> {
        &mut self.successor
    }

    /// Mutable access to the cached digest.
    pub fn raw_digest_mut(&mut self) -> &mut Hash {
        &mut self.digest
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Unlink iteratively; recursive Box drops overflow on long chains
        let mut next = self.successor.take();
        while let Some(mut node) = next {
            next = node.successor.take();
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &String::from_utf8_lossy(&self.value))
            .field("digest", &self.digest_hex())
            .field("has_successor", &self.successor.is_some())
            .finish()
    }
}
