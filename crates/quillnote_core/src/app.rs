//! Application state and lifecycle.
//!
//! # Responsibility
//! - Own every core component behind one explicit struct instead of global
//!   mutable state.
//! - Keep the derived tag index and the persisted snapshot in sync with
//!   store mutations.
//!
//! # Invariants
//! - Store mutations flow through this type so the tag index is never
//!   stale when the rendering layer asks for it.
//! - Snapshot persistence failures are logged and surfaced nowhere else;
//!   the in-memory store stays authoritative for the session.

use crate::config::settings::{
    load_backup_config, load_settings, save_backup_config, save_settings, BackupConfig,
    ConfigError, Settings,
};
use crate::export::xlsx::{write_backup, write_backup_file, ExportError};
use crate::model::note::{Note, NoteId};
use crate::remote::github::{check_connection, ConnectivityResult};
use crate::repo::kv_repo::KvStore;
use crate::search::filter::{filter_notes, FilterState};
use crate::service::editor_session::{EditorSession, SessionError, SessionState};
use crate::store::note_store::NoteStore;
use crate::store::snapshot::{load_notes, save_notes};
use crate::tags::tag_index::TagIndex;
use crate::view::list::{note_list_items, tag_filter_items, NoteListItem, TagFilterItem};
use chrono::Utc;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Session-scoped application state.
///
/// Constructed once at startup; torn down implicitly with the process.
pub struct App<K: KvStore> {
    kv: K,
    store: NoteStore,
    tag_index: TagIndex,
    pub filter: FilterState,
    pub session: EditorSession,
    settings: Settings,
    backup: BackupConfig,
}

impl<K: KvStore> App<K> {
    /// Loads persisted state (or the seed set) and wires every component.
    pub fn init(kv: K) -> Self {
        let settings = load_settings(&kv);
        let backup = load_backup_config(&kv);
        let store = NoteStore::from_notes(load_notes(&kv));
        let tag_index = TagIndex::recompute(store.all());
        let session = EditorSession::new(
            settings.auto_save,
            Duration::from_millis(settings.auto_save_delay),
        );

        info!(
            "event=app_init module=app status=ok notes={} tags={}",
            store.len(),
            tag_index.len()
        );

        Self {
            kv,
            store,
            tag_index,
            filter: FilterState::new(),
            session,
            settings,
            backup,
        }
    }

    /// The authoritative note collection.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// The current derived tag index.
    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    /// Active user settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Active backup configuration.
    pub fn backup_config(&self) -> &BackupConfig {
        &self.backup
    }

    /// Notes matching the current filter, in store order.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        filter_notes(self.store.all(), &self.filter)
    }

    /// Render-ready rows for the filtered note list.
    pub fn note_list(&self) -> Vec<NoteListItem> {
        note_list_items(&self.filtered_notes(), Utc::now())
    }

    /// Render-ready tag sidebar entries.
    pub fn tag_filters(&self) -> Vec<TagFilterItem> {
        tag_filter_items(&self.tag_index, &self.filter)
    }

    /// Tag suggestions for the tag input, excluding the active note's tags.
    pub fn suggest_tags(&self, input: &str) -> Vec<&str> {
        let exclude = self
            .session
            .active_note()
            .map(|note| note.tags.as_slice())
            .unwrap_or(&[]);
        self.tag_index.suggest(input, exclude)
    }

    /// Opens a stored note in the editor session.
    pub fn open_note(&mut self, id: NoteId) -> bool {
        self.session.open(&self.store, id)
    }

    /// Opens a fresh draft in the editor session.
    pub fn start_new_note(&mut self) {
        self.session.start_new(&self.store);
    }

    /// Commits the active note, then refreshes derived and persisted state.
    pub fn save_note(&mut self, title: &str, content: &str) -> Result<Note, SessionError> {
        let committed = self.session.save(&mut self.store, title, content)?;
        self.after_store_change();
        Ok(committed)
    }

    /// Deletes the active note. Returns whether a store entry was removed.
    pub fn delete_note(&mut self) -> bool {
        let removed = self.session.delete(&mut self.store);
        if removed {
            self.after_store_change();
        }
        removed
    }

    /// Fires a due auto-save, if any, refreshing state on success.
    pub fn poll_auto_save(&mut self, now: Instant) -> Option<Result<Note, SessionError>> {
        let result = self.session.poll_auto_save(&mut self.store, now)?;
        if result.is_ok() {
            self.after_store_change();
        }
        Some(result)
    }

    /// Persists new settings and applies the auto-save policy to the
    /// session.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        save_settings(&mut self.kv, &settings)?;
        self.session.set_auto_save(settings.auto_save);
        self.session
            .set_auto_save_delay(Duration::from_millis(settings.auto_save_delay));
        self.settings = settings;
        Ok(())
    }

    /// Persists a new backup configuration; `isConfigured` is recomputed
    /// here, never trusted from the caller.
    pub fn update_backup_config(&mut self, mut config: BackupConfig) -> Result<(), ConfigError> {
        config.refresh_configured();
        save_backup_config(&mut self.kv, &config)?;
        self.backup = config;
        Ok(())
    }

    /// Serializes the full store to spreadsheet bytes.
    pub fn export_backup(&self) -> Result<Vec<u8>, ExportError> {
        write_backup(self.store.all())
    }

    /// Writes the spreadsheet backup into `dir`.
    pub fn export_backup_file(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        write_backup_file(self.store.all(), dir)
    }

    /// Runs the remote connectivity check with the stored credentials.
    pub fn test_backup_connection(&self) -> ConnectivityResult<()> {
        check_connection(&self.backup)
    }

    /// Observable editor session state.
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    fn after_store_change(&mut self) {
        self.tag_index = TagIndex::recompute(self.store.all());
        if let Err(err) = save_notes(&mut self.kv, self.store.all()) {
            warn!("event=notes_persist module=app status=error error={err}");
        }
    }
}
