//! # Keyed Validation Errors
//!
//! A rejected transition reports *every* failed guard, keyed by the guard or
//! field name, each with one or more human-readable messages. The mapping is
//! transient: it is cleared and repopulated on each transition attempt and is
//! never persisted with the record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation errors from the most recent transition attempt, keyed by
/// guard or field name.
///
/// Keys are the observable vocabulary callers match on: field names like
/// `email` and `terms_accepted`, guard names like `won_hacktoberfest?`, and
/// the special `state` key for transitions undefined in the current state.
/// A `BTreeMap` keeps iteration order deterministic for display and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionErrors {
    entries: BTreeMap<String, Vec<String>>,
}

impl TransitionErrors {
    /// Create an empty errors mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message under the given key.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(message.into());
    }

    /// Whether no errors are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys with at least one message.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether any message is recorded under the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Messages recorded under the given key (empty when absent).
    pub fn messages(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(key, messages)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Remove all recorded errors.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Display for TransitionErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (key, messages) in &self.entries {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{key}: {}", messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for TransitionErrors {}
