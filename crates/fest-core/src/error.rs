//! # Error Types — Structured Error Hierarchy
//!
//! Defines the foundational error type used throughout fest-stack. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Guard failures during lifecycle transitions are *not* represented here —
//! they are business validation outcomes, collected into the keyed errors
//! mapping in `fest-state` and surfaced as a rejected transition. This
//! hierarchy covers the mechanical failures: malformed input, IO,
//! serialization.

use thiserror::Error;

/// Top-level error type for fest-stack foundational operations.
#[derive(Error, Debug)]
pub enum FestError {
    /// A timestamp string could not be parsed or is out of range.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// An identifier string could not be parsed.
    #[error("invalid identifier: {0}")]
    Identity(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
