//! # fest-service — Orchestration Around the Lifecycle State Machine
//!
//! `fest-state` defines *what* a valid transition is; this crate supplies
//! everything around it:
//!
//! - **Persistence** (`store`): the [`ParticipantStore`] trait with
//!   in-memory and JSON-file-backed implementations. A successful save is
//!   durable — any subsequent load observes the new state.
//! - **Fact sources** (`facts`): query traits for the externally-computed
//!   eligible activity count and the campaign-ended flag.
//! - **Collaborators** (`notify`): the state-change notifier and
//!   activity-segment updater told about every applied transition.
//! - **Configuration** (`config`): YAML campaign configuration carrying the
//!   qualification thresholds and the campaign window.
//! - **The service** (`service`): [`LifecycleService`] — load, evaluate,
//!   persist, announce.

pub mod config;
pub mod error;
pub mod facts;
pub mod notify;
pub mod service;
pub mod store;

// ─── Config re-exports ──────────────────────────────────────────────

pub use config::CampaignConfig;

// ─── Error re-exports ───────────────────────────────────────────────

pub use error::{CollaboratorError, ConfigError, ServiceError, StoreError};

// ─── Fact-source re-exports ─────────────────────────────────────────

pub use facts::{ActivitySource, CampaignCalendar, FixedCampaignWindow, StaticActivitySource};

// ─── Collaborator re-exports ────────────────────────────────────────

pub use notify::{
    LoggingNotifier, LoggingSegmentUpdater, NoopNotifier, NoopSegmentUpdater, SegmentUpdater,
    StateChangeNotifier,
};

// ─── Service re-exports ─────────────────────────────────────────────

pub use service::LifecycleService;

// ─── Store re-exports ───────────────────────────────────────────────

pub use store::{JsonFileStore, MemoryStore, ParticipantStore};
