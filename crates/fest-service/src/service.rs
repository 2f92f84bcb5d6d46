//! # Lifecycle Service
//!
//! Wires the state machine to its surroundings. Each action entry point
//! loads the record, assembles the fact snapshot from the injected sources,
//! attempts the transition, persists on success, and then tells both
//! collaborators. Guard rejections come back as
//! [`ServiceError::Rejected`] with the keyed errors; the record stays as it
//! was.
//!
//! One durable write per successful action, after guard evaluation and
//! before the collaborators run. Collaborator failures are logged and do
//! not roll the write back.

use fest_core::{ParticipantId, Timestamp};
use fest_state::{Action, Participant, QualificationPolicy, TransitionContext};

use crate::error::ServiceError;
use crate::facts::{ActivitySource, CampaignCalendar};
use crate::notify::{SegmentUpdater, StateChangeNotifier};
use crate::store::ParticipantStore;

/// The lifecycle service: state machine + store + fact sources + collaborators.
#[derive(Debug)]
pub struct LifecycleService<S, A, C, N, U>
where
    S: ParticipantStore,
    A: ActivitySource,
    C: CampaignCalendar,
    N: StateChangeNotifier,
    U: SegmentUpdater,
{
    store: S,
    activity: A,
    calendar: C,
    notifier: N,
    segments: U,
    policy: QualificationPolicy,
}

impl<S, A, C, N, U> LifecycleService<S, A, C, N, U>
where
    S: ParticipantStore,
    A: ActivitySource,
    C: CampaignCalendar,
    N: StateChangeNotifier,
    U: SegmentUpdater,
{
    /// Assemble a service from its parts.
    pub fn new(
        store: S,
        activity: A,
        calendar: C,
        notifier: N,
        segments: U,
        policy: QualificationPolicy,
    ) -> Self {
        Self {
            store,
            activity,
            calendar,
            notifier,
            segments,
            policy,
        }
    }

    /// Create a new participant record in the `new` state.
    pub fn create_participant(
        &mut self,
        email: Option<String>,
        terms_accepted: bool,
    ) -> Result<Participant, ServiceError> {
        let participant = Participant::with_contact(ParticipantId::new(), email, terms_accepted);
        self.store.create(participant.clone())?;
        tracing::info!(participant = %participant.id, "participant created");
        Ok(participant)
    }

    /// Load a participant record.
    pub fn participant(&self, id: &ParticipantId) -> Result<Participant, ServiceError> {
        self.store.load(id)?.ok_or(ServiceError::NotFound(*id))
    }

    /// `new` → `registered`.
    pub fn register(&mut self, id: &ParticipantId) -> Result<Participant, ServiceError> {
        self.apply(id, Action::Register)
    }

    /// `registered` → `waiting`.
    pub fn wait(&mut self, id: &ParticipantId) -> Result<Participant, ServiceError> {
        self.apply(id, Action::Wait)
    }

    /// `waiting` → `completed`.
    pub fn complete(&mut self, id: &ParticipantId) -> Result<Participant, ServiceError> {
        self.apply(id, Action::Complete)
    }

    /// `waiting` → `registered` (recovery).
    pub fn ineligible(&mut self, id: &ParticipantId) -> Result<Participant, ServiceError> {
        self.apply(id, Action::Ineligible)
    }

    /// `registered` → `incompleted`.
    pub fn incomplete(&mut self, id: &ParticipantId) -> Result<Participant, ServiceError> {
        self.apply(id, Action::Incomplete)
    }

    fn apply(&mut self, id: &ParticipantId, action: Action) -> Result<Participant, ServiceError> {
        let mut participant = self.store.load(id)?.ok_or(ServiceError::NotFound(*id))?;

        let now = Timestamp::now();
        let ctx = TransitionContext {
            eligible_pr_count: self.activity.eligible_pr_count(id),
            campaign_ended: self.calendar.ended(now),
            now,
            policy: self.policy,
        };

        match participant.attempt(action, &ctx) {
            Ok(()) => {
                self.store.save(&participant)?;
                tracing::info!(
                    participant = %id,
                    action = %action,
                    state = %participant.state,
                    "transition applied"
                );
                if let Err(e) = self.notifier.notify(&participant) {
                    tracing::warn!(participant = %id, error = %e, "state-change notification failed");
                }
                if let Err(e) = self.segments.update(&participant) {
                    tracing::warn!(participant = %id, error = %e, "segment update failed");
                }
                Ok(participant)
            }
            Err(errors) => {
                tracing::debug!(
                    participant = %id,
                    action = %action,
                    errors = %errors,
                    "transition rejected"
                );
                Err(ServiceError::Rejected { errors })
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
