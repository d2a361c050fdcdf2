//! JSON snapshot of the note collection.
//!
//! # Responsibility
//! - Load the note list from the persistence adapter at startup.
//! - Persist the full list after every committed mutation.
//!
//! # Invariants
//! - Loading never fails: an absent or unreadable snapshot falls back to the
//!   fixed seed set with a logged warning.
//! - Saving writes the whole collection in one `set`; there is no partial
//!   snapshot state.

use crate::model::note::Note;
use crate::repo::kv_repo::{KvError, KvStore};
use crate::store::seed::seed_notes;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persistence adapter key holding the serialized note list.
pub const NOTES_KEY: &str = "notesAppNotes";

/// Errors raised while persisting the snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// The note list could not be serialized to JSON.
    Serialize(serde_json::Error),
    /// The persistence adapter rejected the write.
    Kv(KvError),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize note snapshot: {err}"),
            Self::Kv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Kv(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<KvError> for SnapshotError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Loads the persisted note list, falling back to the seed set.
pub fn load_notes<K: KvStore>(kv: &K) -> Vec<Note> {
    match kv.get(NOTES_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                info!(
                    "event=notes_load module=store status=ok source=snapshot count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=error source=snapshot error={err}"
                );
                seed_notes()
            }
        },
        Ok(None) => {
            info!("event=notes_load module=store status=ok source=seed");
            seed_notes()
        }
        Err(err) => {
            warn!("event=notes_load module=store status=error source=kv error={err}");
            seed_notes()
        }
    }
}

/// Persists the full note list as one JSON blob.
pub fn save_notes<K: KvStore>(kv: &mut K, notes: &[Note]) -> Result<(), SnapshotError> {
    let raw = serde_json::to_string(notes)?;
    kv.set(NOTES_KEY, &raw)?;
    Ok(())
}
