//! Tamper-evident singly linked list
//!
//! ## Algorithm
//!
//! Each node's digest depends on its successor's digest, so a change at
//! position `i` invalidates exactly the nodes at positions `0..i`. Mutations
//! therefore:
//!
//! 1. Validate the index (nothing is touched on failure)
//! 2. Detach the affected prefix from the head
//! 3. Splice the new tail section in place
//! 4. Relink the prefix, recomputing digests tail-to-head
//!
//! Prepending rehashes nothing: no existing node depends on the new head.
//!
//! ## Tamper localization
//!
//! The scan walks head to tail and reports the first node whose cached digest
//! disagrees with a fresh computation over its value and its successor's
//! cached digest. An out-of-band value change fails at that same node. A
//! relink that skips the predecessor's rehash fails at the predecessor. A
//! forger who recomputes every upstream digest consistently is not detected.
//!
//! ## Mutating a tampered chain
//!
//! Mutations recompute the detached prefix without checking it first. Any
//! out-of-band change inside `0..index` is folded into fresh digests and
//! stops being detectable. Callers that need tamper evidence across
//! mutations must run [`SecuredList::is_valid_chain`] (or
//! [`SecuredList::verify`]) before mutating.

use std::fmt;

use shared_crypto::Hash;
use tracing::{debug, warn};

use super::config::{ListConfig, OverflowPolicy};
use super::node::Node;
use super::report::{IntegrityReport, TamperedNode};
use crate::error::{ChainError, IndexFault};
use crate::metrics::ChainMetrics;
use crate::ports::DigestFunction;


type Result<T> = std::result::Result<T, ChainError>;

/// Hash-chained list anchored at the tail.
///
/// Mutations take `&mut self`; validation takes `&self`. Sharing a list
/// across threads requires an external lock around mutations.
pub struct SecuredList<D> {
    head: Option<Box<Node>>,
    digest: D,
    config: ListConfig,
    metrics: ChainMetrics,
}

impl<D: DigestFunction> SecuredList<D> {
    /// Create an empty list with default configuration.
    pub fn new(digest: D) -> Self {
        Self::with_config(digest, ListConfig::default())
    }

    /// Create an empty list.
    pub fn with_config(digest: D, config: ListConfig) -> Self {
        if config.warn_placeholder_digest && !digest.is_cryptographic() {
            warn!(
                "[secured-list] ⚠️ Digest function is not collision resistant; \
                 tamper evidence covers accidental corruption only"
            );
        }

        Self {
            head: None,
            digest,
            config,
            metrics: ChainMetrics::new(),
        }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Prepend `value`. O(1), no rehash.
    pub fn add(&mut self, value: impl Into<Vec<u8>>) {
        let node = Node::new(value.into(), self.head.take(), &self.digest);
        debug!("[secured-list] Prepended node {}", short_hex(node.digest()));
        self.head = Some(Box::new(node));
        self.metrics.record_mutation(0);
    }

    /// Insert `value` so it occupies position `index`.
    ///
    /// The previous occupant moves to `index + 1`. `index == len` appends.
    /// Larger indices follow [`ListConfig::insert_overflow`].
    ///
    /// # Errors
    ///
    /// `InvalidIndex` if `index` is negative, or past the end under
    /// [`OverflowPolicy::Reject`].
    ///
    /// Nodes before `index` are recomputed unchecked, which reseals any
    /// tampering there. Validate first if that matters.
    pub fn insert(&mut self, index: isize, value: impl Into<Vec<u8>>) -> Result<()> {
        let position = self.checked_index(index)?;
        if position == 0 {
            self.add(value);
            return Ok(());
        }

        // The predecessor at position - 1 must exist
        let available = self.count_up_to(position);
        let position = if available < position {
            match self.config.insert_overflow {
                OverflowPolicy::Reject => {
                    return Err(self.reject(index, IndexFault::OutOfRange { len: available }))
                }
                OverflowPolicy::Append => {
                    debug!(
                        "[secured-list] Insert index {} clamped to list end {}",
                        index, available
                    );
                    available
                }
            }
        } else {
            position
        };

        if position == 0 {
            self.add(value);
            return Ok(());
        }

        let value = value.into();
        let rehashed = self.splice(position, move |rest, digest| {
            Some(Box::new(Node::new(value, rest, digest)))
        });

        debug!(
            "[secured-list] Inserted node at {} ({} nodes rehashed)",
            position, rehashed
        );
        self.metrics.record_mutation(rehashed);
        Ok(())
    }

    /// Remove the node at `index` and return its value.
    ///
    /// Removing the head is O(1) with no rehash; otherwise every node before
    /// `index` is rehashed without being checked first, resealing any
    /// tampering in that prefix.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` if the list is empty, `index` is negative, or there is
    /// no node at `index`.
    pub fn remove(&mut self, index: isize) -> Result<Vec<u8>> {
        let position = self.existing_index(index)?;

        if position == 0 {
            let mut old = self
                .head
                .take()
                .ok_or(ChainError::invalid_index(index, IndexFault::EmptyList))?;
            self.head = old.successor.take();
            debug!("[secured-list] Removed head node");
            self.metrics.record_mutation(0);
            return Ok(std::mem::take(&mut old.value));
        }

        let mut removed = None;
        let rehashed = self.splice(position, |rest, _| {
            rest.and_then(|mut node| {
                let next = node.successor.take();
                removed = Some(std::mem::take(&mut node.value));
                next
            })
        });

        debug!(
            "[secured-list] Removed node at {} ({} nodes rehashed)",
            position, rehashed
        );
        self.metrics.record_mutation(rehashed);
        removed.ok_or(ChainError::invalid_index(
            index,
            IndexFault::OutOfRange { len: rehashed },
        ))
    }

    /// Replace the value at `index` and return the previous value.
    ///
    /// Rehashes the updated node and every node before it, unchecked, so
    /// tampering in `0..=index` is resealed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`remove`](Self::remove).
    pub fn update(&mut self, index: isize, value: impl Into<Vec<u8>>) -> Result<Vec<u8>> {
        let position = self.existing_index(index)?;
        let value = value.into();

        let mut previous = None;
        let rehashed = self.splice(position, |rest, digest| {
            rest.map(|mut node| {
                previous = Some(std::mem::replace(&mut node.value, value));
                node.recompute(digest);
                node
            })
        });
        let rehashed = rehashed + usize::from(previous.is_some());

        debug!(
            "[secured-list] Updated node at {} ({} nodes rehashed)",
            position, rehashed
        );
        self.metrics.record_mutation(rehashed);
        previous.ok_or(ChainError::invalid_index(
            index,
            IndexFault::OutOfRange { len: position },
        ))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// True iff no node fails its local digest check.
    pub fn is_valid_chain(&self) -> bool {
        self.find_first_tampered().is_none()
    }

    /// Scan head to tail and return the first node whose cached digest does
    /// not match its current value and successor.
    pub fn find_first_tampered(&self) -> Option<TamperedNode<'_>> {
        let found = self
            .iter()
            .enumerate()
            .find(|(_, node)| !node.is_valid(&self.digest))
            .map(|(index, node)| TamperedNode { index, node });

        self.metrics.record_validation(found.is_some());
        if let Some(tampered) = &found {
            warn!(
                "[secured-list] 🚨 Tampered node at position {} (cached digest {})",
                tampered.index,
                short_hex(tampered.node.digest())
            );
        }
        found
    }

    /// Check every node and report all inconsistencies.
    pub fn verify(&self) -> IntegrityReport {
        let mut report = IntegrityReport::new(self.root_digest().map(hex::encode));
        for (index, node) in self.iter().enumerate() {
            report.record(index, node.is_valid(&self.digest));
        }

        self.metrics.record_validation(!report.chain_valid);
        if !report.chain_valid {
            warn!(
                "[secured-list] 🚨 Integrity check failed: {}/{} nodes inconsistent, first at {:?}",
                report.tampered_positions.len(),
                report.total_nodes,
                report.first_tampered()
            );
        }
        report
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Detach the first `count` nodes, hand the remainder to `f`, then relink
    /// the detached nodes in front of whatever `f` returns, recomputing their
    /// digests tail-to-head. Returns the number of nodes relinked.
    fn splice<F>(&mut self, count: usize, f: F) -> usize
    where
        F: FnOnce(Option<Box<Node>>, &D) -> Option<Box<Node>>,
    {
        let mut prefix = Vec::with_capacity(count);
        let mut rest = self.head.take();
        while prefix.len() < count {
            let Some(mut node) = rest.take() else {
                break;
            };
            rest = node.successor.take();
            prefix.push(node);
        }

        let mut chain = f(rest, &self.digest);
        let rehashed = prefix.len();
        for mut node in prefix.into_iter().rev() {
            node.successor = chain;
            node.recompute(&self.digest);
            chain = Some(node);
        }
        self.head = chain;
        rehashed
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        usize::try_from(index).map_err(|_| self.reject(index, IndexFault::Negative))
    }

    /// Validate that `index` names an existing node.
    fn existing_index(&self, index: isize) -> Result<usize> {
        if self.head.is_none() {
            return Err(self.reject(index, IndexFault::EmptyList));
        }
        let position = self.checked_index(index)?;
        let available = self.count_up_to(position.saturating_add(1));
        if available <= position {
            return Err(self.reject(index, IndexFault::OutOfRange { len: available }));
        }
        Ok(position)
    }

    fn reject(&self, index: isize, reason: IndexFault) -> ChainError {
        debug!("[secured-list] Rejected index {}: {}", index, reason);
        self.metrics.record_rejected();
        ChainError::invalid_index(index, reason)
    }

    fn count_up_to(&self, limit: usize) -> usize {
        self.iter().take(limit).count()
    }
}

impl<D> SecuredList<D> {
    /// Number of nodes. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Node at `index`. O(index).
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.iter().nth(index)
    }

    /// Mutable node at `index` for out-of-band access.
    ///
    /// Writes through the returned node bypass rehashing; see
    /// [`Node::raw_value_mut`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.successor.as_deref_mut();
        }
        current
    }

    /// Iterate nodes head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Iterate values head to tail.
    pub fn values(&self) -> impl Iterator<Item = &[u8]> {
        self.iter().map(Node::value)
    }

    /// Cached digest of the head, committing to the whole chain.
    pub fn root_digest(&self) -> Option<&Hash> {
        self.head().map(Node::digest)
    }

    pub fn digest_fn(&self) -> &D {
        &self.digest
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn metrics(&self) -> &ChainMetrics {
        &self.metrics
    }
}

impl<D> fmt::Debug for SecuredList<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, D> IntoIterator for &'a SecuredList<D> {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over nodes.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.successor();
        Some(node)
    }
}

fn short_hex(digest: &Hash) -> String {
    hex::encode(&digest[..4])
}
