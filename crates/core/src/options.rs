// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparator options.
//!
//! Options are plain serde data so harnesses can embed them in their own
//! scenario files, or load them from a standalone TOML file:
//!
//! ```toml
//! key_policy = "count_only"
//! cycle_policy = "reject"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// How mapping key sets are checked once every key of the left operand has
/// matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Both mappings must have exactly the same own keys
    #[default]
    Strict,
    /// Only the number of keys must match; a key missing on the right reads
    /// as `undefined`, so `{x: undefined}` matches `{y: undefined}`
    CountOnly,
}

/// What to do when the walk reaches a pair of composites it is already
/// comparing further up the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Treat the revisited pair as equal
    #[default]
    AssumeEqual,
    /// Fail with [`CompareError::CyclicStructure`](crate::CompareError)
    Reject,
}

/// Structural comparison settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    pub key_policy: KeyPolicy,
    pub cycle_policy: CyclePolicy,
}

/// Errors that can occur when loading options
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CompareOptions {
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Parse options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
