//! # Service Error Types
//!
//! Mechanical failures (storage, configuration, collaborators) are ordinary
//! `thiserror` enums propagated with `?`. A guard rejection is *not* a
//! mechanical failure — it is carried as [`ServiceError::Rejected`] with the
//! keyed errors mapping for the caller to display, and the record is left
//! untouched.

use thiserror::Error;

use fest_core::ParticipantId;
use fest_state::TransitionErrors;

/// Errors from participant store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with this identifier already exists.
    #[error("participant {0} already exists")]
    AlreadyExists(ParticipantId),

    /// Reading or writing the backing file failed.
    #[error("io error at {path}: {source}")]
    Io {
        /// Path of the backing file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Store contents could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors loading or writing campaign configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("io error at {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected shape.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A side-effecting collaborator reported failure.
///
/// Collaborator failures never gate a transition; the service logs them and
/// moves on.
#[derive(Error, Debug)]
#[error("collaborator {collaborator} failed: {reason}")]
pub struct CollaboratorError {
    /// Which collaborator failed (e.g. `state-change-notifier`).
    pub collaborator: &'static str,
    /// Human-readable failure description.
    pub reason: String,
}

/// Top-level error type for lifecycle service operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No record exists for the identifier.
    #[error("participant {0} not found")]
    NotFound(ParticipantId),

    /// The transition was rejected by its guards; the record is unchanged.
    #[error("transition rejected: {errors}")]
    Rejected {
        /// Keyed guard/field errors from the attempt.
        errors: TransitionErrors,
    },

    /// A store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
