//! # Participant Record
//!
//! The persistent record moving through the campaign lifecycle, with its
//! state, contact attributes, transition audit log, and the transient keyed
//! errors from the most recent transition attempt.

use serde::{Deserialize, Serialize};

use fest_core::{ParticipantId, Timestamp};

use crate::errors::TransitionErrors;
use crate::transition::Action;

// ─── Lifecycle State ─────────────────────────────────────────────────

/// The lifecycle state of a participant.
///
/// The snake_case names are the stored/wire vocabulary (`new`, `registered`,
/// `waiting`, `completed`, `incompleted`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantState {
    /// Record created, not yet registered for the campaign.
    New,
    /// Terms accepted and contact info present; eligible to start waiting.
    Registered,
    /// Enough qualifying activity; serving the waiting period.
    Waiting,
    /// Waiting period served with enough activity (terminal).
    Completed,
    /// Campaign ended before the participant qualified (terminal).
    Incompleted,
}

impl ParticipantState {
    /// All states, in lifecycle order.
    pub const ALL: [ParticipantState; 5] = [
        Self::New,
        Self::Registered,
        Self::Waiting,
        Self::Completed,
        Self::Incompleted,
    ];

    /// The canonical state name (`new`, `registered`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Registered => "registered",
            Self::Waiting => "waiting",
            Self::Completed => "completed",
            Self::Incompleted => "incompleted",
        }
    }

    /// Whether this state has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Incompleted)
    }
}

impl std::fmt::Display for ParticipantState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Transition Record ───────────────────────────────────────────────

/// Record of a single applied lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The action that triggered the transition.
    pub action: Action,
    /// State before the transition.
    pub from_state: ParticipantState,
    /// State after the transition.
    pub to_state: ParticipantState,
    /// When the transition was applied (UTC).
    pub timestamp: Timestamp,
}

// ─── Participant ─────────────────────────────────────────────────────

/// A campaign participant with lifecycle state and transition history.
///
/// Transitions are attempted through [`Participant::attempt`] (or the named
/// per-action methods); a rejected attempt leaves every business attribute
/// untouched and repopulates [`Participant::errors`] with one entry per
/// failed guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Unique participant identifier.
    pub id: ParticipantId,
    /// Contact email; must be present and non-blank to register.
    pub email: Option<String>,
    /// Whether the participation terms have been accepted.
    pub terms_accepted: bool,
    /// Current lifecycle state.
    pub state: ParticipantState,
    /// Set on entering `waiting`, cleared on leaving it.
    pub waiting_since: Option<Timestamp>,
    /// When the record was created.
    pub created_at: Timestamp,
    /// Ordered log of all applied transitions.
    pub transitions: Vec<TransitionRecord>,
    /// Keyed errors from the most recent transition attempt. Transient —
    /// never serialized or persisted.
    #[serde(skip)]
    pub errors: TransitionErrors,
}

impl Participant {
    /// Create a new record in the `new` state with no contact info.
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            email: None,
            terms_accepted: false,
            state: ParticipantState::New,
            waiting_since: None,
            created_at: Timestamp::now(),
            transitions: Vec::new(),
            errors: TransitionErrors::new(),
        }
    }

    /// Create a new record with contact attributes already filled in.
    pub fn with_contact(id: ParticipantId, email: Option<String>, terms_accepted: bool) -> Self {
        Self {
            email,
            terms_accepted,
            ..Self::new(id)
        }
    }

    /// Whether the record is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Append an audit record and move to the new state.
    pub(crate) fn record_transition(&mut self, action: Action, to: ParticipantState, at: Timestamp) {
        self.transitions.push(TransitionRecord {
            action,
            from_state: self.state,
            to_state: to,
            timestamp: at,
        });
        self.state = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
