//! Secured list configuration
//!
//! # Example
//!
//! ```ignore
//! use secured_list::domain::{ListConfigBuilder, OverflowPolicy};
//!
//! let config = ListConfigBuilder::new()
//!     .insert_overflow(OverflowPolicy::Append)
//!     .warn_placeholder_digest(false)
//!     .build();
//! ```

use std::env::{self, VarError};
use std::str::FromStr;

use crate::error::ChainError;

/// What `insert` does with an index past the end of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with `InvalidIndex`.
    #[default]
    Reject,
    /// Clamp to the end and append.
    Append,
}

impl FromStr for OverflowPolicy {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(OverflowPolicy::Reject),
            "append" => Ok(OverflowPolicy::Append),
            other => Err(ChainError::InvalidConfig(format!(
                "unknown insert overflow policy '{}' (expected reject|append)",
                other
            ))),
        }
    }
}

/// Secured list configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Behaviour of `insert` past the tail
    pub insert_overflow: OverflowPolicy,
    /// Log a warning when the list is built with a non-cryptographic digest
    pub warn_placeholder_digest: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            insert_overflow: OverflowPolicy::Reject,
            warn_placeholder_digest: true,
        }
    }
}

impl ListConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SC_INSERT_OVERFLOW`: `reject` or `append` (default: reject)
    /// - `SC_WARN_PLACEHOLDER_DIGEST`: `true` or `false` (default: true)
    ///
    /// An unset variable takes its default. A set variable that is not valid
    /// UTF-8 is an `InvalidConfig` error, like any other unparseable value.
    pub fn from_env() -> Result<Self, ChainError> {
        let defaults = Self::default();

        let insert_overflow = match read_var("SC_INSERT_OVERFLOW")? {
            Some(raw) => raw.parse()?,
            None => defaults.insert_overflow,
        };

        let warn_placeholder_digest = match read_var("SC_WARN_PLACEHOLDER_DIGEST")? {
            Some(raw) => parse_bool(&raw)?,
            None => defaults.warn_placeholder_digest,
        };

        Ok(Self {
            insert_overflow,
            warn_placeholder_digest,
        })
    }

    /// Builder-style method to set the overflow policy
    pub fn with_insert_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.insert_overflow = policy;
        self
    }
}

fn read_var(name: &str) -> Result<Option<String>, ChainError> {
    match env::var(name) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ChainError::InvalidConfig(format!(
            "{} is not valid UTF-8",
            name
        ))),
    }
}

fn parse_bool(raw: &str) -> Result<bool, ChainError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ChainError::InvalidConfig(format!(
            "expected a boolean, got '{}'",
            other
        ))),
    }
}

/// Builder for ListConfig
#[derive(Default)]
pub struct ListConfigBuilder {
    insert_overflow: Option<OverflowPolicy>,
    warn_placeholder_digest: Option<bool>,
}

impl ListConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overflow policy for `insert`
    pub fn insert_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.insert_overflow = Some(policy);
        self
    }

    /// Enable or disable the placeholder digest warning
    pub fn warn_placeholder_digest(mut self, warn: bool) -> Self {
        self.warn_placeholder_digest = Some(warn);
        self
    }

    /// Build the ListConfig
    pub fn build(self) -> ListConfig {
        let defaults = ListConfig::default();

        ListConfig {
            insert_overflow: self.insert_overflow.unwrap_or(defaults.insert_overflow),
            warn_placeholder_digest: self
                .warn_placeholder_digest
                .unwrap_or(defaults.warn_placeholder_digest),
        }
    }
}
