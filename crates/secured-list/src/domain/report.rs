//! Chain integrity reporting

use serde::{Deserialize, Serialize};

use super::node::Node;

/// First node found whose cached digest disagrees with its contents.
#[derive(Debug, Clone, Copy)]
pub struct TamperedNode<'a> {
    /// Zero-based position from the head.
    pub index: usize,
    pub node: &'a Node,
}

/// Result of a full chain scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Nodes visited
    pub total_nodes: usize,
    /// Nodes whose cached digest matched
    pub verified_nodes: usize,
    /// Positions of every locally inconsistent node, head first
    pub tampered_positions: Vec<usize>,
    /// Hex-encoded cached digest of the head, if any
    pub root_digest: Option<String>,
    /// Whether every node passed
    pub chain_valid: bool,
}

impl IntegrityReport {
    pub(crate) fn new(root_digest: Option<String>) -> Self {
        Self {
            root_digest,
            chain_valid: true,
            ..Default::default()
        }
    }

    pub(crate) fn record(&mut self, index: usize, valid: bool) {
        self.total_nodes += 1;
        if valid {
            self.verified_nodes += 1;
        } else {
            self.tampered_positions.push(index);
            self.chain_valid = false;
        }
    }

    /// Position of the first inconsistent node.
    pub fn first_tampered(&self) -> Option<usize> {
        self.tampered_positions.first().copied()
    }
}
