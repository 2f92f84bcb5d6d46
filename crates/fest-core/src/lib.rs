//! # fest-core — Foundational Types for fest-stack
//!
//! The leaf crate of the workspace: every other `fest-*` crate depends on
//! `fest-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ParticipantId` and
//!    `CampaignId` are UUID newtypes — you cannot pass one where the other
//!    is expected, and no bare strings carry identifiers.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision. Elapsed-time rules (the waiting-period check) are
//!    computed from explicit timestamp pairs, never from ambient clock reads
//!    inside business logic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fest-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::FestError;
pub use identity::{CampaignId, ParticipantId};
pub use temporal::Timestamp;
