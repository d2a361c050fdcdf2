//! Editor session: the single note open for editing.
//!
//! # Responsibility
//! - Track at most one active note (or none) and its unsaved draft state.
//! - Mediate tag add/remove on the active note and trigger persistence.
//! - Own auto-save scheduling, firing and cancellation.
//!
//! # Invariants
//! - Switching or closing the active note cancels any pending auto-save, so
//!   a stale deadline can never write an earlier note's inputs.
//! - `save` delegates to the store commit and is therefore all-or-nothing.

use crate::model::note::{Note, NoteId, ValidationError};
use crate::service::autosave::AutoSaveTimer;
use crate::store::note_store::NoteStore;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No note open.
    Empty,
    /// A new note is open that has never been committed.
    Editing,
    /// The open note exists in the store.
    EditingExisting,
}

/// Session-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// An operation requiring an active note ran with none open.
    NoActiveNote,
    /// The store rejected the commit.
    Validation(ValidationError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveNote => write!(f, "no note is open for editing"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoActiveNote => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

#[derive(Debug, Clone)]
struct ActiveNote {
    note: Note,
    /// Whether the note's id currently exists in the store.
    persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingInput {
    title: String,
    content: String,
}

/// Tracks the single note open for editing and its auto-save deadline.
#[derive(Debug, Clone)]
pub struct EditorSession {
    active: Option<ActiveNote>,
    timer: AutoSaveTimer,
    auto_save_enabled: bool,
    pending_input: Option<PendingInput>,
}

impl EditorSession {
    /// Creates an empty session with the given auto-save policy.
    pub fn new(auto_save_enabled: bool, auto_save_delay: Duration) -> Self {
        Self {
            active: None,
            timer: AutoSaveTimer::new(auto_save_delay),
            auto_save_enabled,
            pending_input: None,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        match &self.active {
            None => SessionState::Empty,
            Some(active) if active.persisted => SessionState::EditingExisting,
            Some(_) => SessionState::Editing,
        }
    }

    /// The note currently open for editing, if any.
    pub fn active_note(&self) -> Option<&Note> {
        self.active.as_ref().map(|active| &active.note)
    }

    /// Loads a store entry into the session.
    ///
    /// An unknown id is a silent no-op; the session keeps its current state.
    /// On success any pending auto-save for the previous note is canceled.
    /// Returns whether a note was opened.
    pub fn open(&mut self, store: &NoteStore, id: NoteId) -> bool {
        let Some(note) = store.get(id) else {
            return false;
        };
        self.reset_pending();
        self.active = Some(ActiveNote {
            note: note.clone(),
            persisted: true,
        });
        true
    }

    /// Opens a fresh transient draft created by the store.
    ///
    /// The draft has no store entry until the first successful save.
    pub fn start_new(&mut self, store: &NoteStore) {
        self.reset_pending();
        self.active = Some(ActiveNote {
            note: store.create(),
            persisted: false,
        });
    }

    /// Commits the active note with the given inputs.
    ///
    /// On success the committed note stays open as the active note (a
    /// previously-new note transitions to `EditingExisting`).
    ///
    /// # Errors
    /// - [`SessionError::NoActiveNote`] when nothing is open.
    /// - [`SessionError::Validation`] when the store rejects the commit; the
    ///   store and the session draft are left unchanged.
    pub fn save(
        &mut self,
        store: &mut NoteStore,
        title: &str,
        content: &str,
    ) -> Result<Note, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveNote)?;

        let mut candidate = active.note.clone();
        candidate.title = title.to_string();
        candidate.content = content.to_string();

        let committed = store.commit(candidate)?;
        active.note = committed.clone();
        active.persisted = true;
        // Keep the fire-time inputs aligned with what was just written.
        self.pending_input = Some(PendingInput {
            title: committed.title.clone(),
            content: committed.content.clone(),
        });
        Ok(committed)
    }

    /// Adds a tag to the active note and schedules auto-save on change.
    ///
    /// Empty input, duplicates (case-insensitive) and a missing active note
    /// are no-ops. Returns whether the tag set changed.
    pub fn add_tag(&mut self, raw: &str, now: Instant) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let added = active.note.add_tag(raw);
        if added && self.auto_save_enabled {
            self.timer.schedule(now);
        }
        added
    }

    /// Removes a tag from the active note and schedules auto-save on change.
    ///
    /// A tag that is not present and a missing active note are no-ops.
    /// Returns whether the tag set changed.
    pub fn remove_tag(&mut self, raw: &str, now: Instant) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let removed = active.note.remove_tag(raw);
        if removed && self.auto_save_enabled {
            self.timer.schedule(now);
        }
        removed
    }

    /// Deletes the active note from the store and returns to `Empty`.
    ///
    /// Any pending auto-save is canceled first. Returns whether a store
    /// entry was removed (an unsaved draft yields `false`).
    pub fn delete(&mut self, store: &mut NoteStore) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        self.reset_pending();
        store.delete(active.note.id)
    }

    /// Records the latest editor inputs and (re)starts the debounce.
    ///
    /// Each call cancels the prior deadline; only the most recent one can
    /// fire, and it fires with the inputs recorded here. A no-op when no
    /// note is open. When auto-save is disabled the inputs are still
    /// recorded so a manual save path can reuse them.
    pub fn schedule_auto_save(&mut self, title: &str, content: &str, now: Instant) {
        if self.active.is_none() {
            return;
        }
        self.pending_input = Some(PendingInput {
            title: title.to_string(),
            content: content.to_string(),
        });
        if self.auto_save_enabled {
            self.timer.schedule(now);
        }
    }

    /// Cancels any pending auto-save deadline.
    pub fn cancel_pending(&mut self) {
        self.timer.cancel();
    }

    /// Returns whether an auto-save deadline is pending.
    pub fn has_pending_auto_save(&self) -> bool {
        self.timer.is_pending()
    }

    /// Fires the auto-save if its deadline has passed.
    ///
    /// Commits the last-known title/content recorded at schedule time (or
    /// the active note's own fields when nothing was recorded). Returns
    /// `None` when nothing fired.
    pub fn poll_auto_save(
        &mut self,
        store: &mut NoteStore,
        now: Instant,
    ) -> Option<Result<Note, SessionError>> {
        if !self.timer.fire_if_due(now) {
            return None;
        }

        let (title, content) = match (&self.pending_input, &self.active) {
            (Some(pending), Some(_)) => (pending.title.clone(), pending.content.clone()),
            (None, Some(active)) => (active.note.title.clone(), active.note.content.clone()),
            // The deadline outlived the note; nothing to write.
            _ => return None,
        };

        debug!("event=auto_save module=session status=fire");
        Some(self.save(store, &title, &content))
    }

    /// Enables or disables auto-save. Disabling cancels any pending
    /// deadline.
    pub fn set_auto_save(&mut self, enabled: bool) {
        self.auto_save_enabled = enabled;
        if !enabled {
            self.timer.cancel();
        }
    }

    /// Replaces the auto-save quiet-period delay.
    pub fn set_auto_save_delay(&mut self, delay: Duration) {
        self.timer.set_delay(delay);
    }

    fn reset_pending(&mut self) {
        self.timer.cancel();
        self.pending_input = None;
    }
}
