//! Counters for chain mutation and validation activity
//!
//! ## Usage
//!
//! ```ignore
//! let mut list = SecuredList::new(Blake3Digest::new());
//! list.add("a");
//! list.insert(1, "b")?;
//!
//! let snapshot = list.metrics().snapshot();
//! assert_eq!(snapshot.nodes_rehashed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for one [`SecuredList`](crate::SecuredList).
///
/// Validation runs through `&self`, so counters are atomics.
#[derive(Debug, Default)]
pub struct ChainMetrics {
    /// Successful structural or value mutations
    pub mutations: AtomicU64,
    /// Nodes whose digest was recomputed by a mutation
    pub nodes_rehashed: AtomicU64,
    /// Mutations rejected before touching the chain
    pub mutations_rejected: AtomicU64,
    /// Chain scans performed (find_first_tampered / verify)
    pub validations: AtomicU64,
    /// Scans that found at least one inconsistent node
    pub tamper_detections: AtomicU64,
}

impl ChainMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed mutation that recomputed `rehashed` nodes
    pub fn record_mutation(&self, rehashed: usize) {
        self.mutations.fetch_add(1, Ordering::Relaxed);
        self.nodes_rehashed.fetch_add(rehashed as u64, Ordering::Relaxed);
    }

    /// Record a mutation refused with an error
    pub fn record_rejected(&self) {
        self.mutations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a chain scan and whether it found tampering
    pub fn record_validation(&self, tampered: bool) {
        self.validations.fetch_add(1, Ordering::Relaxed);
        if tampered {
            self.tamper_detections.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            mutations: self.mutations.load(Ordering::Relaxed),
            nodes_rehashed: self.nodes_rehashed.load(Ordering::Relaxed),
            mutations_rejected: self.mutations_rejected.load(Ordering::Relaxed),
            validations: self.validations.load(Ordering::Relaxed),
            tamper_detections: self.tamper_detections.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.mutations.store(0, Ordering::Relaxed);
        self.nodes_rehashed.store(0, Ordering::Relaxed);
        self.mutations_rejected.store(0, Ordering::Relaxed);
        self.validations.store(0, Ordering::Relaxed);
        self.tamper_detections.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub mutations: u64,
    pub nodes_rehashed: u64,
    pub mutations_rejected: u64,
    pub validations: u64,
    pub tamper_detections: u64,
}
