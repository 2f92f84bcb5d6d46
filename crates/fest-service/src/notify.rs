//! # Side-Effecting Collaborators
//!
//! Two collaborators are told about every applied transition: the
//! state-change notifier (participant-facing messaging) and the
//! activity-segment updater (audience segmentation). Both are ordinary
//! injected traits; production implementations talk to external systems,
//! the implementations here log or do nothing.
//!
//! Collaborator failure never gates a transition — the service logs a
//! warning and continues.

use fest_state::Participant;

use crate::error::CollaboratorError;

/// Collaborator A: announces an applied state change.
pub trait StateChangeNotifier {
    /// Notify about the record's new state.
    fn notify(&self, participant: &Participant) -> Result<(), CollaboratorError>;
}

/// Collaborator B: updates the participant's activity segment.
pub trait SegmentUpdater {
    /// Re-segment the record after a state change.
    fn update(&self, participant: &Participant) -> Result<(), CollaboratorError>;
}

// ─── Provided Implementations ────────────────────────────────────────

/// Notifier that records the state change in the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl StateChangeNotifier for LoggingNotifier {
    fn notify(&self, participant: &Participant) -> Result<(), CollaboratorError> {
        tracing::info!(
            participant = %participant.id,
            state = %participant.state,
            "state change notified"
        );
        Ok(())
    }
}

/// Segment updater that records the update in the log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSegmentUpdater;

impl SegmentUpdater for LoggingSegmentUpdater {
    fn update(&self, participant: &Participant) -> Result<(), CollaboratorError> {
        tracing::info!(
            participant = %participant.id,
            state = %participant.state,
            "activity segment updated"
        );
        Ok(())
    }
}

/// Notifier that does nothing and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl StateChangeNotifier for NoopNotifier {
    fn notify(&self, _participant: &Participant) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Segment updater that does nothing and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSegmentUpdater;

impl SegmentUpdater for NoopSegmentUpdater {
    fn update(&self, _participant: &Participant) -> Result<(), CollaboratorError> {
        Ok(())
    }
}
