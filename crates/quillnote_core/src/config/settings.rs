//! Persisted settings and backup configuration blobs.
//!
//! # Responsibility
//! - Model the two independent JSON blobs stored by the persistence
//!   adapter, with their historical camelCase wire names.
//! - Merge partial persisted blobs over defaults on load.
//!
//! # Invariants
//! - Loading never fails: absent or unreadable blobs yield defaults with a
//!   logged warning.
//! - `isConfigured` is recomputed from credentials on every save, never
//!   trusted from input.

use crate::repo::kv_repo::{KvError, KvStore};
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Persistence adapter key for user settings.
pub const SETTINGS_KEY: &str = "notesAppSettings";
/// Persistence adapter key for the backup configuration.
pub const BACKUP_CONFIG_KEY: &str = "notesAppGitHubConfig";

const DEFAULT_AUTO_SAVE_DELAY_MS: u64 = 2000;
const DEFAULT_BACKUP_FILE_PATH: &str = "notes-data.xlsx";

/// User-facing preferences.
///
/// Each field carries a serde default so a blob persisted by an older build
/// merges over the current defaults instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub auto_save: bool,
    /// Auto-save debounce delay in milliseconds.
    pub auto_save_delay: u64,
    pub show_preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            auto_save: true,
            auto_save_delay: DEFAULT_AUTO_SAVE_DELAY_MS,
            show_preview: true,
        }
    }
}

/// Remote backup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupConfig {
    pub token: String,
    pub username: String,
    pub repository: String,
    pub file_path: String,
    pub is_configured: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            username: String::new(),
            repository: String::new(),
            file_path: DEFAULT_BACKUP_FILE_PATH.to_string(),
            is_configured: false,
        }
    }
}

impl BackupConfig {
    /// Recomputes `is_configured` from the credential fields.
    pub fn refresh_configured(&mut self) {
        self.is_configured = !self.username.trim().is_empty()
            && !self.repository.trim().is_empty()
            && !self.token.trim().is_empty();
    }

    /// Returns whether the connectivity check has enough to authenticate.
    pub fn has_credentials(&self) -> bool {
        !self.username.trim().is_empty() && !self.token.trim().is_empty()
    }
}

/// Configuration persistence failure.
#[derive(Debug)]
pub enum ConfigError {
    /// The blob could not be serialized.
    Serialize(serde_json::Error),
    /// The persistence adapter rejected the write.
    Kv(KvError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize configuration: {err}"),
            Self::Kv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Kv(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<KvError> for ConfigError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Loads user settings, tolerating absent or unreadable blobs.
pub fn load_settings<K: KvStore>(kv: &K) -> Settings {
    load_blob(kv, SETTINGS_KEY)
}

/// Persists user settings.
pub fn save_settings<K: KvStore>(kv: &mut K, settings: &Settings) -> Result<(), ConfigError> {
    save_blob(kv, SETTINGS_KEY, settings)
}

/// Loads the backup configuration, tolerating absent or unreadable blobs.
pub fn load_backup_config<K: KvStore>(kv: &K) -> BackupConfig {
    load_blob(kv, BACKUP_CONFIG_KEY)
}

/// Persists the backup configuration.
pub fn save_backup_config<K: KvStore>(
    kv: &mut K,
    config: &BackupConfig,
) -> Result<(), ConfigError> {
    save_blob(kv, BACKUP_CONFIG_KEY, config)
}

fn load_blob<K: KvStore, T: Default + for<'de> Deserialize<'de>>(kv: &K, key: &str) -> T {
    match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=config_load module=config status=error key={key} error={err}");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!("event=config_load module=config status=error key={key} error={err}");
            T::default()
        }
    }
}

fn save_blob<K: KvStore, T: Serialize>(kv: &mut K, key: &str, value: &T) -> Result<(), ConfigError> {
    let raw = serde_json::to_string(value)?;
    kv.set(key, &raw)?;
    Ok(())
}
