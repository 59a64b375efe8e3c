//! Error types for the secured list.

use std::fmt;

use thiserror::Error;

/// Errors returned by [`SecuredList`](crate::SecuredList) operations.
///
/// Every error is raised before the chain is touched, so a failed call
/// leaves links and digests exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Invalid index {index}: {reason}")]
    InvalidIndex { index: isize, reason: IndexFault },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Why an index was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFault {
    /// Index below zero.
    Negative,
    /// Removal or update on a list with no nodes.
    EmptyList,
    /// Index past the last valid position for the operation.
    OutOfRange { len: usize },
}

impl fmt::Display for IndexFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexFault::Negative => write!(f, "index out of range (negative)"),
            IndexFault::EmptyList => write!(f, "cannot modify an empty list"),
            IndexFault::OutOfRange { len } => {
                write!(f, "index out of range (list length {})", len)
            }
        }
    }
}

impl ChainError {
    pub(crate) fn invalid_index(index: isize, reason: IndexFault) -> Self {
        ChainError::InvalidIndex { index, reason }
    }
}
