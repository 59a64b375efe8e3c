//! Domain Layer - Pure chain logic
//!
//! This layer contains:
//! - `Node`: value, owned successor, cached digest
//! - `SecuredList`: mutation API, partial rehash, tamper scan
//! - `ListConfig`: overflow policy and digest warnings
//! - `IntegrityReport`: full scan results
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod config;
pub mod list;
pub mod node;
pub mod report;

pub use config::{ListConfig, ListConfigBuilder, OverflowPolicy};
pub use list::{Iter, SecuredList};
pub use node::Node;
pub use report::{IntegrityReport, TamperedNode};
