//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers in fest-stack. These prevent
//! accidental identifier confusion — you cannot pass a `CampaignId` where a
//! `ParticipantId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FestError;

/// Unique identifier for a participant record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

/// Unique identifier for a campaign (a single time-boxed contribution drive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub Uuid);

impl ParticipantId {
    /// Generate a new random participant identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a participant identifier from its hyphenated UUID string form,
    /// the same form `Display` prints.
    pub fn parse(s: &str) -> Result<Self, FestError> {
        let uuid = Uuid::parse_str(s)
            .map_err(|e| FestError::Identity(format!("participant id {s:?}: {e}")))?;
        Ok(Self(uuid))
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl CampaignId {
    /// Generate a new random campaign identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for CampaignId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
