//! # Guard Predicates
//!
//! Each lifecycle transition is gated by a list of named guards. A guard is a
//! pure function over the record and the [`TransitionContext`] snapshot,
//! returning pass or fail-with-message. The transition executor runs every
//! guard on the list and collects all failures, so callers see the complete
//! set of unmet conditions, not just the first.
//!
//! Guard keys are observable vocabulary: callers match on them when
//! displaying rejections, so they are stable strings, not Rust identifiers.

use crate::context::TransitionContext;
use crate::participant::Participant;

// ─── Error Keys ──────────────────────────────────────────────────────

/// Field key: participation terms not accepted.
pub const KEY_TERMS_ACCEPTED: &str = "terms_accepted";
/// Field key: email missing or blank.
pub const KEY_EMAIL: &str = "email";
/// Guard key: not enough eligible pull requests to start waiting.
pub const KEY_SUFFICIENT_ELIGIBLE_PRS: &str = "sufficient_eligible_prs?";
/// Guard key: winning conditions (activity count and waiting period) not met.
pub const KEY_WON_HACKTOBERFEST: &str = "won_hacktoberfest?";
/// Guard key: the record still qualifies, so the recovery edge is rejected.
pub const KEY_INSUFFICIENT_ELIGIBLE_PRS: &str = "insufficient_eligible_prs?";
/// Guard key: the campaign has not ended.
pub const KEY_HACKTOBERFEST_ENDED: &str = "hacktoberfest_ended?";

// ─── Guard Machinery ─────────────────────────────────────────────────

/// Outcome of a single guard predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    /// The condition holds; the guard does not block the transition.
    Pass,
    /// The condition does not hold; carries the human-readable message.
    Fail(String),
}

/// A named guard: the error key it reports under, and its predicate.
#[derive(Debug, Clone, Copy)]
pub struct GuardDef {
    /// Error key the guard reports failures under.
    pub key: &'static str,
    /// Pure predicate over record and context.
    pub check: fn(&Participant, &TransitionContext) -> GuardVerdict,
}

// ─── Guard Definitions ───────────────────────────────────────────────

/// Registration guard: terms must be accepted.
pub const TERMS_ACCEPTED: GuardDef = GuardDef {
    key: KEY_TERMS_ACCEPTED,
    check: terms_accepted,
};

/// Registration guard: a non-blank email must be present.
pub const EMAIL_PRESENT: GuardDef = GuardDef {
    key: KEY_EMAIL,
    check: email_present,
};

/// Waiting guard: enough eligible pull requests.
pub const SUFFICIENT_ELIGIBLE_PRS: GuardDef = GuardDef {
    key: KEY_SUFFICIENT_ELIGIBLE_PRS,
    check: sufficient_eligible_prs,
};

/// Completion guard: activity count and waiting period, as one composite
/// condition. Partial satisfaction fails with the single composite message.
pub const WON_HACKTOBERFEST: GuardDef = GuardDef {
    key: KEY_WON_HACKTOBERFEST,
    check: won_hacktoberfest,
};

/// Recovery guard: the record must have dropped below the activity threshold.
pub const INSUFFICIENT_ELIGIBLE_PRS: GuardDef = GuardDef {
    key: KEY_INSUFFICIENT_ELIGIBLE_PRS,
    check: insufficient_eligible_prs,
};

/// Incompletion guard: the campaign must have ended.
pub const HACKTOBERFEST_ENDED: GuardDef = GuardDef {
    key: KEY_HACKTOBERFEST_ENDED,
    check: hacktoberfest_ended,
};

// ─── Predicates ──────────────────────────────────────────────────────

fn terms_accepted(participant: &Participant, _ctx: &TransitionContext) -> GuardVerdict {
    if participant.terms_accepted {
        GuardVerdict::Pass
    } else {
        GuardVerdict::Fail("terms of participation must be accepted".to_string())
    }
}

fn email_present(participant: &Participant, _ctx: &TransitionContext) -> GuardVerdict {
    match participant.email.as_deref() {
        Some(email) if !email.trim().is_empty() => GuardVerdict::Pass,
        _ => GuardVerdict::Fail("email address must be present".to_string()),
    }
}

fn sufficient_eligible_prs(_participant: &Participant, ctx: &TransitionContext) -> GuardVerdict {
    if ctx.eligible_pr_count >= ctx.policy.min_eligible_prs {
        GuardVerdict::Pass
    } else {
        GuardVerdict::Fail(format!(
            "user does not have enough eligible pull requests (have {}, need {})",
            ctx.eligible_pr_count, ctx.policy.min_eligible_prs
        ))
    }
}

fn won_hacktoberfest(participant: &Participant, ctx: &TransitionContext) -> GuardVerdict {
    let enough_prs = ctx.eligible_pr_count >= ctx.policy.min_eligible_prs;
    let waited_long_enough = participant
        .waiting_since
        .map(|since| ctx.now.days_since(since) >= ctx.policy.waiting_period_days)
        .unwrap_or(false);
    if enough_prs && waited_long_enough {
        GuardVerdict::Pass
    } else {
        GuardVerdict::Fail("user has not met all winning conditions".to_string())
    }
}

fn insufficient_eligible_prs(_participant: &Participant, ctx: &TransitionContext) -> GuardVerdict {
    if ctx.eligible_pr_count < ctx.policy.min_eligible_prs {
        GuardVerdict::Pass
    } else {
        GuardVerdict::Fail(format!(
            "user still has {} eligible pull requests and remains qualified",
            ctx.eligible_pr_count
        ))
    }
}

fn hacktoberfest_ended(_participant: &Participant, ctx: &TransitionContext) -> GuardVerdict {
    if ctx.campaign_ended {
        GuardVerdict::Pass
    } else {
        GuardVerdict::Fail("hacktoberfest has not ended".to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
