//! Persistence for the single pet record.
//!
//! The engine reaches storage only through the `PetStore` contract. The
//! record itself is one JSON document whose layout is fixed by
//! `PetState`'s serde derives. Callers that cannot load a record are
//! expected to substitute a fresh one rather than propagate the failure
//! into the transforms; `Session` does exactly that.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::PetState;

pub mod error;

pub use error::StoreError;

/// Load/save contract for the single persisted record.
pub trait PetStore {
    /// Load the record. A store that has never saved returns `Ok(None)`.
    fn load(&self) -> Result<Option<PetState>, StoreError>;

    /// Persist the record, replacing any previous one.
    fn save(&mut self, state: &PetState) -> Result<(), StoreError>;
}

/// File-backed store holding the record as one pretty-printed JSON
/// document.
///
/// Writes are atomic: the document goes to a sibling temp file first and
/// is renamed over the target, so an interrupted save never leaves a
/// half-written record behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        tmp.into()
    }
}

impl PetStore for JsonFileStore {
    fn load(&self) -> Result<Option<PetState>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_str(&json)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
        Ok(Some(state))
    }

    fn save(&mut self, state: &PetState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-process store, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    slot: Option<PetState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PetStore for MemoryStore {
    fn load(&self) -> Result<Option<PetState>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, state: &PetState) -> Result<(), StoreError> {
        self.slot = Some(state.clone());
        Ok(())
    }
}
