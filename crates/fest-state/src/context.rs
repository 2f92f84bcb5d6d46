//! # Transition Context
//!
//! Every fact a guard may consult arrives in an explicit [`TransitionContext`]
//! snapshot: the externally-computed eligible-contribution count, the global
//! campaign-ended flag, the evaluation time, and the qualification thresholds.
//! Guards never read the clock or any other ambient state, which keeps them
//! deterministic and directly testable.

use fest_core::Timestamp;
use serde::{Deserialize, Serialize};

/// Qualification thresholds for advancing through the lifecycle.
///
/// Campaign configuration may override these; the defaults are the standard
/// drive rules (4 eligible pull requests, 7-day waiting period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationPolicy {
    /// Minimum eligible pull requests to start (and stay) waiting.
    pub min_eligible_prs: u32,
    /// Whole days a participant must remain waiting before completion.
    pub waiting_period_days: i64,
}

impl Default for QualificationPolicy {
    fn default() -> Self {
        Self {
            min_eligible_prs: 4,
            waiting_period_days: 7,
        }
    }
}

/// Snapshot of externally-supplied facts for a single transition attempt.
///
/// Collaborators resolve these values *before* the attempt; evaluation is
/// synchronous against this snapshot.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext {
    /// Eligible pull-request count for the record, externally computed.
    pub eligible_pr_count: u32,
    /// Whether the campaign has ended (global fact).
    pub campaign_ended: bool,
    /// The evaluation time; also stamped on applied transitions.
    pub now: Timestamp,
    /// Thresholds the guards evaluate against.
    pub policy: QualificationPolicy,
}

impl TransitionContext {
    /// Build a context with the default qualification policy.
    pub fn new(eligible_pr_count: u32, campaign_ended: bool, now: Timestamp) -> Self {
        Self {
            eligible_pr_count,
            campaign_ended,
            now,
            policy: QualificationPolicy::default(),
        }
    }
}
