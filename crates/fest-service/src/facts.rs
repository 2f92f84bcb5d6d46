//! # External Fact Sources
//!
//! The lifecycle guards evaluate facts the record does not carry: the
//! eligible pull-request count and the campaign-ended flag. These arrive
//! through query traits so tests (and the CLI, where activity data is
//! supplied by the operator) can substitute their own answers.

use std::collections::HashMap;

use fest_core::{ParticipantId, Timestamp};

// ─── Activity ────────────────────────────────────────────────────────

/// Query interface for the externally-computed eligible activity count.
pub trait ActivitySource {
    /// Eligible pull-request count for the record.
    fn eligible_pr_count(&self, id: &ParticipantId) -> u32;
}

/// Activity source backed by a fixed table with a fallback default.
///
/// Production deployments answer this query from the contribution review
/// pipeline; tests and the CLI pin counts directly.
#[derive(Debug, Default)]
pub struct StaticActivitySource {
    counts: HashMap<ParticipantId, u32>,
    default: u32,
}

impl StaticActivitySource {
    /// A source answering `default` for every record.
    pub fn with_default(default: u32) -> Self {
        Self {
            counts: HashMap::new(),
            default,
        }
    }

    /// Pin the count for a specific record.
    pub fn set(&mut self, id: ParticipantId, count: u32) {
        self.counts.insert(id, count);
    }
}

impl ActivitySource for StaticActivitySource {
    fn eligible_pr_count(&self, id: &ParticipantId) -> u32 {
        self.counts.get(id).copied().unwrap_or(self.default)
    }
}

// ─── Campaign Calendar ───────────────────────────────────────────────

/// Query interface for the global campaign-ended fact.
pub trait CampaignCalendar {
    /// Whether the campaign has ended as of `now`.
    fn ended(&self, now: Timestamp) -> bool;
}

/// Calendar defined by a fixed end timestamp.
///
/// With no end timestamp the campaign never ends — useful for drives whose
/// close date is not yet announced.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCampaignWindow {
    /// When the campaign ends, if announced.
    pub ends_at: Option<Timestamp>,
}

impl FixedCampaignWindow {
    /// A window ending at the given time.
    pub fn ending_at(ends_at: Timestamp) -> Self {
        Self {
            ends_at: Some(ends_at),
        }
    }
}

impl CampaignCalendar for FixedCampaignWindow {
    fn ended(&self, now: Timestamp) -> bool {
        self.ends_at.map(|ends_at| now >= ends_at).unwrap_or(false)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
