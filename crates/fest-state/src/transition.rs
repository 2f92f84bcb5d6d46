//! # Transition Table and Executor
//!
//! The lifecycle is driven by an explicit static table: each action maps to
//! exactly one (from-state, to-state) edge and an ordered list of guards.
//! The executor validates the current state against the edge, runs **all**
//! guards collecting every failure, and mutates the record only when the
//! failure set is empty.
//!
//! A rejected attempt changes nothing but the transient errors mapping — the
//! state, business attributes, and audit log are untouched.

use serde::{Deserialize, Serialize};

use crate::context::TransitionContext;
use crate::errors::TransitionErrors;
use crate::guard::{self, GuardDef, GuardVerdict};
use crate::participant::{Participant, ParticipantState};

// ─── Actions ─────────────────────────────────────────────────────────

/// A named lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// `new` → `registered`; requires accepted terms and an email.
    Register,
    /// `registered` → `waiting`; requires enough eligible pull requests.
    Wait,
    /// `waiting` → `completed`; requires the full winning conditions.
    Complete,
    /// `waiting` → `registered`; recovery edge when qualification is lost.
    Ineligible,
    /// `registered` → `incompleted`; requires the campaign to have ended.
    Incomplete,
}

impl Action {
    /// All actions.
    pub const ALL: [Action; 5] = [
        Self::Register,
        Self::Wait,
        Self::Complete,
        Self::Ineligible,
        Self::Incomplete,
    ];

    /// The canonical action name (`register`, `wait`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Wait => "wait",
            Self::Complete => "complete",
            Self::Ineligible => "ineligible",
            Self::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Transition Table ────────────────────────────────────────────────

/// Error key for transitions undefined in the current state.
pub const STATE_ERROR_KEY: &str = "state";

/// One row of the transition table: an action's edge and its guards.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRule {
    /// The action this row defines.
    pub action: Action,
    /// Required current state.
    pub from: ParticipantState,
    /// State entered when every guard passes.
    pub to: ParticipantState,
    /// Guards, evaluated in order; all failures are collected.
    pub guards: &'static [GuardDef],
}

/// The full lifecycle table. One row per action; `completed` and
/// `incompleted` have no outgoing rows and are therefore terminal.
pub const TRANSITIONS: &[TransitionRule] = &[
    TransitionRule {
        action: Action::Register,
        from: ParticipantState::New,
        to: ParticipantState::Registered,
        guards: &[guard::TERMS_ACCEPTED, guard::EMAIL_PRESENT],
    },
    TransitionRule {
        action: Action::Wait,
        from: ParticipantState::Registered,
        to: ParticipantState::Waiting,
        guards: &[guard::SUFFICIENT_ELIGIBLE_PRS],
    },
    TransitionRule {
        action: Action::Complete,
        from: ParticipantState::Waiting,
        to: ParticipantState::Completed,
        guards: &[guard::WON_HACKTOBERFEST],
    },
    TransitionRule {
        action: Action::Ineligible,
        from: ParticipantState::Waiting,
        to: ParticipantState::Registered,
        guards: &[guard::INSUFFICIENT_ELIGIBLE_PRS],
    },
    TransitionRule {
        action: Action::Incomplete,
        from: ParticipantState::Registered,
        to: ParticipantState::Incompleted,
        guards: &[guard::HACKTOBERFEST_ENDED],
    },
];

/// The table row for an action.
pub fn rule_for(action: Action) -> &'static TransitionRule {
    match action {
        Action::Register => &TRANSITIONS[0],
        Action::Wait => &TRANSITIONS[1],
        Action::Complete => &TRANSITIONS[2],
        Action::Ineligible => &TRANSITIONS[3],
        Action::Incomplete => &TRANSITIONS[4],
    }
}

// ─── Executor ────────────────────────────────────────────────────────

impl Participant {
    /// Attempt a lifecycle transition against a fact snapshot.
    ///
    /// Clears and repopulates [`Participant::errors`]. On success the record
    /// moves to the target state, the audit log gains one entry stamped with
    /// `ctx.now`, and the errors mapping is left empty. On rejection the
    /// returned mapping (also stored on the record) holds one entry per
    /// failed guard — or a single `state`-keyed entry when the action is not
    /// defined for the current state.
    pub fn attempt(
        &mut self,
        action: Action,
        ctx: &TransitionContext,
    ) -> Result<(), TransitionErrors> {
        self.errors.clear();

        let rule = rule_for(action);
        if self.state != rule.from {
            self.errors
                .add(STATE_ERROR_KEY, format!("cannot transition via \"{action}\""));
            return Err(self.errors.clone());
        }

        let mut failures = TransitionErrors::new();
        for guard in rule.guards {
            if let GuardVerdict::Fail(message) = (guard.check)(self, ctx) {
                failures.add(guard.key, message);
            }
        }
        if !failures.is_empty() {
            self.errors = failures.clone();
            return Err(failures);
        }

        self.record_transition(action, rule.to, ctx.now);
        if rule.to == ParticipantState::Waiting {
            self.waiting_since = Some(ctx.now);
        } else if rule.from == ParticipantState::Waiting {
            self.waiting_since = None;
        }
        Ok(())
    }

    /// `new` → `registered`.
    pub fn register(&mut self, ctx: &TransitionContext) -> Result<(), TransitionErrors> {
        self.attempt(Action::Register, ctx)
    }

    /// `registered` → `waiting`.
    pub fn wait(&mut self, ctx: &TransitionContext) -> Result<(), TransitionErrors> {
        self.attempt(Action::Wait, ctx)
    }

    /// `waiting` → `completed`.
    pub fn complete(&mut self, ctx: &TransitionContext) -> Result<(), TransitionErrors> {
        self.attempt(Action::Complete, ctx)
    }

    /// `waiting` → `registered` (recovery).
    pub fn ineligible(&mut self, ctx: &TransitionContext) -> Result<(), TransitionErrors> {
        self.attempt(Action::Ineligible, ctx)
    }

    /// `registered` → `incompleted`.
    pub fn incomplete(&mut self, ctx: &TransitionContext) -> Result<(), TransitionErrors> {
        self.attempt(Action::Incomplete, ctx)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{
        KEY_EMAIL, KEY_HACKTOBERFEST_ENDED, KEY_INSUFFICIENT_ELIGIBLE_PRS,
        KEY_SUFFICIENT_ELIGIBLE_PRS, KEY_TERMS_ACCEPTED, KEY_WON_HACKTOBERFEST,
    };
    use fest_core::{ParticipantId, Timestamp};

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn now() -> Timestamp {
        ts("2026-10-15T12:00:00Z")
    }

    fn ctx(eligible_pr_count: u32, campaign_ended: bool) -> TransitionContext {
        TransitionContext::new(eligible_pr_count, campaign_ended, now())
    }

    fn make_new() -> Participant {
        Participant::with_contact(
            ParticipantId::new(),
            Some("octocat@example.com".to_string()),
            true,
        )
    }

    fn make_registered() -> Participant {
        let mut p = make_new();
        p.register(&ctx(0, false)).unwrap();
        p
    }

    /// A waiting record whose waiting period started `days_waited` days
    /// before the test's fixed `now`.
    fn make_waiting(days_waited: i64) -> Participant {
        let mut p = make_registered();
        let entered = TransitionContext::new(4, false, now().minus_days(days_waited));
        p.wait(&entered).unwrap();
        p
    }

    // ── register ─────────────────────────────────────────────────────

    #[test]
    fn test_register_happy_path() {
        let mut p = make_new();
        p.register(&ctx(0, false)).unwrap();
        assert_eq!(p.state, ParticipantState::Registered);
        assert!(p.errors.is_empty());
        assert_eq!(p.transitions.len(), 1);
        assert_eq!(p.transitions[0].action, Action::Register);
        assert_eq!(p.transitions[0].from_state, ParticipantState::New);
        assert_eq!(p.transitions[0].to_state, ParticipantState::Registered);
        assert_eq!(p.transitions[0].timestamp, now());
    }

    #[test]
    fn test_register_without_terms() {
        let mut p = make_new();
        p.terms_accepted = false;
        let errors = p.register(&ctx(0, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::New);
        assert_eq!(errors.key_count(), 1);
        assert!(errors.contains(KEY_TERMS_ACCEPTED));
        assert_eq!(
            errors.messages(KEY_TERMS_ACCEPTED),
            ["terms of participation must be accepted"]
        );
    }

    #[test]
    fn test_register_without_email() {
        let mut p = make_new();
        p.email = None;
        let errors = p.register(&ctx(0, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::New);
        assert_eq!(errors.key_count(), 1);
        assert_eq!(errors.messages(KEY_EMAIL), ["email address must be present"]);
    }

    #[test]
    fn test_register_with_blank_email() {
        let mut p = make_new();
        p.email = Some("   ".to_string());
        let errors = p.register(&ctx(0, false)).unwrap_err();
        assert!(errors.contains(KEY_EMAIL));
        assert_eq!(p.state, ParticipantState::New);
    }

    #[test]
    fn test_register_reports_all_failed_field_guards_together() {
        let mut p = Participant::new(ParticipantId::new());
        let errors = p.register(&ctx(0, false)).unwrap_err();
        assert_eq!(errors.key_count(), 2);
        assert!(errors.contains(KEY_TERMS_ACCEPTED));
        assert!(errors.contains(KEY_EMAIL));
        assert_eq!(p.state, ParticipantState::New);
        assert!(p.transitions.is_empty());
    }

    #[test]
    fn test_register_twice_is_undefined_transition() {
        let mut p = make_registered();
        let errors = p.register(&ctx(0, false)).unwrap_err();
        assert_eq!(errors.key_count(), 1);
        assert_eq!(
            errors.messages(STATE_ERROR_KEY),
            ["cannot transition via \"register\""]
        );
        assert_eq!(p.state, ParticipantState::Registered);
    }

    // ── wait ─────────────────────────────────────────────────────────

    #[test]
    fn test_wait_with_enough_prs() {
        let mut p = make_registered();
        p.wait(&ctx(4, false)).unwrap();
        assert_eq!(p.state, ParticipantState::Waiting);
        assert_eq!(p.waiting_since, Some(now()));
        assert_eq!(p.transitions.len(), 2);
    }

    #[test]
    fn test_wait_with_too_few_prs() {
        let mut p = make_registered();
        let errors = p.wait(&ctx(3, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::Registered);
        assert!(p.waiting_since.is_none());
        assert!(errors.contains(KEY_SUFFICIENT_ELIGIBLE_PRS));
    }

    #[test]
    fn test_wait_from_new_is_undefined() {
        let mut p = make_new();
        let errors = p.wait(&ctx(10, false)).unwrap_err();
        assert_eq!(errors.messages(STATE_ERROR_KEY), ["cannot transition via \"wait\""]);
        assert_eq!(p.state, ParticipantState::New);
    }

    // ── complete ─────────────────────────────────────────────────────

    #[test]
    fn test_complete_after_eight_days_with_four_prs() {
        let mut p = make_waiting(8);
        p.complete(&ctx(4, false)).unwrap();
        assert_eq!(p.state, ParticipantState::Completed);
        assert!(p.waiting_since.is_none());
        assert!(p.is_terminal());
    }

    #[test]
    fn test_complete_too_early() {
        let mut p = make_waiting(2);
        let errors = p.complete(&ctx(4, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::Waiting);
        assert_eq!(errors.key_count(), 1);
        assert!(errors.messages(KEY_WON_HACKTOBERFEST)[0]
            .contains("user has not met all winning conditions"));
    }

    #[test]
    fn test_complete_with_too_few_prs() {
        let mut p = make_waiting(8);
        let errors = p.complete(&ctx(3, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::Waiting);
        // Single composite guard error, not one per unmet condition.
        assert_eq!(errors.key_count(), 1);
        assert!(errors.contains(KEY_WON_HACKTOBERFEST));
    }

    #[test]
    fn test_complete_with_both_conditions_unmet() {
        let mut p = make_waiting(2);
        let errors = p.complete(&ctx(0, false)).unwrap_err();
        assert_eq!(errors.key_count(), 1);
        assert!(errors.contains(KEY_WON_HACKTOBERFEST));
    }

    #[test]
    fn test_complete_at_exactly_seven_days() {
        let mut p = make_waiting(7);
        p.complete(&ctx(4, false)).unwrap();
        assert_eq!(p.state, ParticipantState::Completed);
    }

    // ── ineligible ───────────────────────────────────────────────────

    #[test]
    fn test_ineligible_recovers_to_registered() {
        let mut p = make_waiting(2);
        p.ineligible(&ctx(3, false)).unwrap();
        assert_eq!(p.state, ParticipantState::Registered);
        assert!(p.waiting_since.is_none());
    }

    #[test]
    fn test_ineligible_rejected_while_still_qualified() {
        let mut p = make_waiting(2);
        let errors = p.ineligible(&ctx(4, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::Waiting);
        assert!(errors.contains(KEY_INSUFFICIENT_ELIGIBLE_PRS));
    }

    #[test]
    fn test_requalify_after_recovery_resets_waiting_since() {
        let mut p = make_waiting(5);
        let first_entry = p.waiting_since.unwrap();
        p.ineligible(&ctx(0, false)).unwrap();
        p.wait(&ctx(4, false)).unwrap();
        assert_eq!(p.state, ParticipantState::Waiting);
        assert_eq!(p.waiting_since, Some(now()));
        assert_ne!(p.waiting_since, Some(first_entry));
    }

    // ── incomplete ───────────────────────────────────────────────────

    #[test]
    fn test_incomplete_when_campaign_ended() {
        let mut p = make_registered();
        p.incomplete(&ctx(0, true)).unwrap();
        assert_eq!(p.state, ParticipantState::Incompleted);
        assert!(p.is_terminal());
    }

    #[test]
    fn test_incomplete_while_campaign_running() {
        let mut p = make_registered();
        let errors = p.incomplete(&ctx(0, false)).unwrap_err();
        assert_eq!(p.state, ParticipantState::Registered);
        assert!(errors.contains(KEY_HACKTOBERFEST_ENDED));
        assert_eq!(errors.messages(KEY_HACKTOBERFEST_ENDED), ["hacktoberfest has not ended"]);
    }

    #[test]
    fn test_incomplete_from_completed_is_undefined() {
        let mut p = make_waiting(8);
        p.complete(&ctx(4, false)).unwrap();
        let errors = p.incomplete(&ctx(0, true)).unwrap_err();
        assert_eq!(
            errors.messages(STATE_ERROR_KEY),
            ["cannot transition via \"incomplete\""]
        );
        assert_eq!(p.state, ParticipantState::Completed);
    }

    // ── errors lifecycle ─────────────────────────────────────────────

    #[test]
    fn test_errors_cleared_on_next_successful_attempt() {
        let mut p = make_registered();
        p.wait(&ctx(3, false)).unwrap_err();
        assert!(p.errors.contains(KEY_SUFFICIENT_ELIGIBLE_PRS));

        p.wait(&ctx(4, false)).unwrap();
        assert!(p.errors.is_empty());
        assert_eq!(p.state, ParticipantState::Waiting);
    }

    #[test]
    fn test_errors_repopulated_per_attempt() {
        let mut p = make_new();
        p.email = None;
        p.register(&ctx(0, false)).unwrap_err();
        assert!(p.errors.contains(KEY_EMAIL));

        p.email = Some("octocat@example.com".to_string());
        p.terms_accepted = false;
        p.register(&ctx(0, false)).unwrap_err();
        assert!(!p.errors.contains(KEY_EMAIL));
        assert!(p.errors.contains(KEY_TERMS_ACCEPTED));
    }

    #[test]
    fn test_failed_attempt_leaves_log_untouched() {
        let mut p = make_registered();
        let log_len = p.transitions.len();
        p.wait(&ctx(0, false)).unwrap_err();
        assert_eq!(p.transitions.len(), log_len);
    }

    // ── full lifecycle ───────────────────────────────────────────────

    #[test]
    fn test_full_winning_lifecycle() {
        let mut p = make_new();
        p.register(&ctx(0, false)).unwrap();
        let entered = TransitionContext::new(4, false, now().minus_days(8));
        p.attempt(Action::Wait, &entered).unwrap();
        p.complete(&ctx(5, false)).unwrap();

        assert_eq!(p.state, ParticipantState::Completed);
        assert_eq!(p.transitions.len(), 3);
        let states: Vec<ParticipantState> =
            p.transitions.iter().map(|t| t.to_state).collect();
        assert_eq!(
            states,
            [
                ParticipantState::Registered,
                ParticipantState::Waiting,
                ParticipantState::Completed
            ]
        );
    }

    #[test]
    fn test_losing_lifecycle_via_recovery_and_campaign_end() {
        let mut p = make_new();
        p.register(&ctx(0, false)).unwrap();
        p.wait(&ctx(4, false)).unwrap();
        p.ineligible(&ctx(1, false)).unwrap();
        p.incomplete(&ctx(1, true)).unwrap();
        assert_eq!(p.state, ParticipantState::Incompleted);
        assert_eq!(p.transitions.len(), 4);
    }

    // ── table shape ──────────────────────────────────────────────────

    #[test]
    fn test_table_has_one_row_per_action() {
        for action in Action::ALL {
            assert_eq!(rule_for(action).action, action);
            assert_eq!(
                TRANSITIONS.iter().filter(|s| s.action == action).count(),
                1
            );
        }
    }

    #[test]
    fn test_terminal_states_have_no_outgoing_rows() {
        for rule in TRANSITIONS {
            assert!(!rule.from.is_terminal());
        }
    }

    #[test]
    fn test_action_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Action::Register).unwrap(), "\"register\"");
        assert_eq!(serde_json::to_string(&Action::Ineligible).unwrap(), "\"ineligible\"");
    }
}
