//! In-memory note store.
//!
//! # Responsibility
//! - Own the ordered note collection and all mutations of it.
//! - Enforce commit-time validation and title defaulting.
//!
//! # Invariants
//! - `commit` is all-or-nothing: a failed commit leaves the store unchanged.
//! - New commits surface first; re-commits of an existing id update in place
//!   without reordering.
//! - Every `commit`/`delete` invalidates any derived tag index; the caller
//!   recomputes it.

use crate::model::note::{Note, NoteId, ValidationError, UNTITLED_TITLE};
use chrono::Utc;

/// Ordered, id-unique collection of notes.
///
/// The store is plain session-scoped state: constructed once at startup from
/// a snapshot or the seed set, torn down implicitly with the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from previously persisted or seeded notes.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant
    /// holds even for a hand-edited snapshot.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut unique: Vec<Note> = Vec::with_capacity(notes.len());
        for note in notes {
            if unique.iter().all(|existing| existing.id != note.id) {
                unique.push(note);
            }
        }
        Self { notes: unique }
    }

    /// Constructs a transient draft note.
    ///
    /// Assigns `id`, `created_at` and `updated_at`; the draft is NOT inserted
    /// into the collection. Insertion happens at [`NoteStore::commit`].
    pub fn create(&self) -> Note {
        Note::draft(Utc::now())
    }

    /// Commits a note: inserts a new entry at the front, or replaces the
    /// existing entry with the same id in place.
    ///
    /// The title is trimmed and defaults to [`UNTITLED_TITLE`] when empty;
    /// `updated_at` is bumped to now.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyNote`] when both title and content are empty
    ///   after trimming. The store is left untouched.
    pub fn commit(&mut self, mut note: Note) -> Result<Note, ValidationError> {
        let title = note.title.trim();
        if title.is_empty() && note.content.trim().is_empty() {
            return Err(ValidationError::EmptyNote);
        }

        note.title = if title.is_empty() {
            UNTITLED_TITLE.to_string()
        } else {
            title.to_string()
        };
        note.updated_at = Utc::now();

        match self.notes.iter().position(|slot| slot.id == note.id) {
            Some(slot) => self.notes[slot] = note.clone(),
            None => self.notes.insert(0, note.clone()),
        }

        Ok(note)
    }

    /// Removes the note with the given id if present.
    ///
    /// Deleting an unknown id is a no-op. Returns whether a removal occurred.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    /// Gets one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns all notes in store order (most recent commits of new notes
    /// first, existing notes in their established positions).
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes currently committed.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
