//! Core domain logic for Quillnote.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod remote;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;
pub mod tags;
pub mod view;

pub use app::App;
pub use config::settings::{
    load_backup_config, load_settings, save_backup_config, save_settings, BackupConfig,
    ConfigError, Settings, BACKUP_CONFIG_KEY, SETTINGS_KEY,
};
pub use export::xlsx::{
    read_backup, write_backup, write_backup_file, ExportError, BACKUP_FILE_NAME,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    normalize_tag, normalize_tags, Note, NoteId, ValidationError, UNTITLED_TITLE,
};
pub use remote::github::{check_connection, ConnectivityError, ConnectivityResult};
pub use repo::kv_repo::{KvError, KvResult, KvStore, SqliteKvStore};
pub use search::filter::{filter_notes, FilterState};
pub use service::autosave::AutoSaveTimer;
pub use service::editor_session::{EditorSession, SessionError, SessionState};
pub use store::note_store::NoteStore;
pub use store::seed::seed_notes;
pub use store::snapshot::{load_notes, save_notes, SnapshotError, NOTES_KEY};
pub use tags::tag_index::{TagCount, TagIndex, MAX_SUGGESTIONS};
pub use view::list::{note_list_items, tag_filter_items, NoteListItem, TagFilterItem};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
