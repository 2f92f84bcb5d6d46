//! # fest-state — Participant Lifecycle State Machine
//!
//! Models the lifecycle of a campaign participant as a guard-gated state
//! machine over an explicit transition table.
//!
//! ## States
//!
//! ```text
//! new ──register──▶ registered ──wait──▶ waiting ──complete──▶ completed (terminal)
//!                       ▲  │                │
//!                       │  └──incomplete──▶ incompleted (terminal)
//!                       │                   │
//!                       └────ineligible─────┘
//! ```
//!
//! ## Design
//!
//! Transitions are rows of a static table ([`TRANSITIONS`]): action →
//! (from-state, to-state, ordered guard list). Guards are pure functions
//! over the record and an explicit [`TransitionContext`] fact snapshot —
//! eligible activity count, campaign-ended flag, evaluation time, and
//! thresholds all arrive as inputs, never as ambient reads. The executor
//! runs every guard and collects **all** failures into the keyed
//! [`TransitionErrors`] mapping; the record mutates only when the failure
//! set is empty, so a rejected attempt is observable purely through
//! `errors`.
//!
//! An enum-with-validated-transitions design (rather than typestate) fits
//! here: records are loaded from storage with the state known only at
//! runtime, and callers need uniform `attempt(action)` dispatch plus the
//! collected-failures contract.

pub mod context;
pub mod errors;
pub mod guard;
pub mod participant;
pub mod transition;

// ─── Context re-exports ─────────────────────────────────────────────

pub use context::{QualificationPolicy, TransitionContext};

// ─── Error-mapping re-exports ───────────────────────────────────────

pub use errors::TransitionErrors;

// ─── Guard re-exports ───────────────────────────────────────────────

pub use guard::{
    GuardDef, GuardVerdict, KEY_EMAIL, KEY_HACKTOBERFEST_ENDED, KEY_INSUFFICIENT_ELIGIBLE_PRS,
    KEY_SUFFICIENT_ELIGIBLE_PRS, KEY_TERMS_ACCEPTED, KEY_WON_HACKTOBERFEST,
};

// ─── Participant re-exports ─────────────────────────────────────────

pub use participant::{Participant, ParticipantState, TransitionRecord};

// ─── Transition re-exports ──────────────────────────────────────────

pub use transition::{rule_for, Action, TransitionRule, STATE_ERROR_KEY, TRANSITIONS};
