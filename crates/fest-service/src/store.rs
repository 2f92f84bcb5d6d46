//! # Participant Persistence
//!
//! The [`ParticipantStore`] trait is the seam between the lifecycle and
//! whatever holds the records. The durability contract: once `save` (or
//! `create`) returns `Ok`, any subsequent `load` — including from a freshly
//! opened store over the same backing data — observes the written state.
//!
//! Two implementations: [`MemoryStore`] for tests and ephemeral tooling, and
//! [`JsonFileStore`], which keeps the full record set in a single JSON file
//! and replaces it atomically (write temp, then rename) on every mutation.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use fest_core::ParticipantId;
use fest_state::Participant;

use crate::error::StoreError;

/// Create/load/save operations over participant records.
pub trait ParticipantStore {
    /// Insert a new record. Fails if the identifier is already present.
    fn create(&mut self, participant: Participant) -> Result<(), StoreError>;

    /// Load a record by identifier, `None` when absent.
    fn load(&self, id: &ParticipantId) -> Result<Option<Participant>, StoreError>;

    /// Persist the record, replacing any existing one with the same id.
    fn save(&mut self, participant: &Participant) -> Result<(), StoreError>;
}

// ─── MemoryStore ─────────────────────────────────────────────────────

/// In-memory store for tests and ephemeral tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: HashMap<ParticipantId, Participant>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl ParticipantStore for MemoryStore {
    fn create(&mut self, participant: Participant) -> Result<(), StoreError> {
        if self.participants.contains_key(&participant.id) {
            return Err(StoreError::AlreadyExists(participant.id));
        }
        self.participants.insert(participant.id, participant);
        Ok(())
    }

    fn load(&self, id: &ParticipantId) -> Result<Option<Participant>, StoreError> {
        Ok(self.participants.get(id).cloned())
    }

    fn save(&mut self, participant: &Participant) -> Result<(), StoreError> {
        self.participants.insert(participant.id, participant.clone());
        Ok(())
    }
}

// ─── JsonFileStore ───────────────────────────────────────────────────

/// File-backed store: the full record set as one JSON document.
///
/// Every mutation rewrites the file through a temp-file-and-rename, so a
/// crash mid-write leaves the previous contents intact. Suited to the CLI's
/// single-writer usage; concurrent writers are last-write-wins.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    participants: BTreeMap<ParticipantId, Participant>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing contents if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let participants = if path.exists() {
            let bytes = fs::read(&path).map_err(|e| io_error(&path, e))?;
            serde_json::from_slice(&bytes)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, participants })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.participants)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;
        Ok(())
    }
}

impl ParticipantStore for JsonFileStore {
    fn create(&mut self, participant: Participant) -> Result<(), StoreError> {
        if self.participants.contains_key(&participant.id) {
            return Err(StoreError::AlreadyExists(participant.id));
        }
        self.participants.insert(participant.id, participant);
        self.flush()
    }

    fn load(&self, id: &ParticipantId) -> Result<Option<Participant>, StoreError> {
        Ok(self.participants.get(id).cloned())
    }

    fn save(&mut self, participant: &Participant) -> Result<(), StoreError> {
        self.participants.insert(participant.id, participant.clone());
        self.flush()
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_participant() -> Participant {
        Participant::with_contact(
            ParticipantId::new(),
            Some("octocat@example.com".to_string()),
            true,
        )
    }

    #[test]
    fn test_memory_store_create_and_load() {
        let mut store = MemoryStore::new();
        let p = make_participant();
        store.create(p.clone()).unwrap();
        let loaded = store.load(&p.id).unwrap().unwrap();
        assert_eq!(loaded.id, p.id);
        assert_eq!(loaded.email, p.email);
    }

    #[test]
    fn test_memory_store_duplicate_create_rejected() {
        let mut store = MemoryStore::new();
        let p = make_participant();
        store.create(p.clone()).unwrap();
        assert!(matches!(
            store.create(p),
            Err(StoreError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_memory_store_load_absent() {
        let store = MemoryStore::new();
        assert!(store.load(&ParticipantId::new()).unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_is_upsert() {
        let mut store = MemoryStore::new();
        let mut p = make_participant();
        store.create(p.clone()).unwrap();
        p.terms_accepted = false;
        store.save(&p).unwrap();
        let loaded = store.load(&p.id).unwrap().unwrap();
        assert!(!loaded.terms_accepted);
        assert_eq!(store.len(), 1);
    }
}
