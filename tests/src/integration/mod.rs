//! # Integration Tests
//!
//! Exercise `secured-list` through its public API only, the way an embedding
//! application would.

pub mod chain_flows;
pub mod tamper_scenarios;
