//! Key-value persistence adapter.
//!
//! # Responsibility
//! - Provide durable `get`/`set` for the opaque JSON blobs the core
//!   persists: settings, backup configuration and the note snapshot.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set` upserts: a key holds at most one value.
//! - Construction verifies the migrated schema instead of failing later.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type KvResult<T> = Result<T, KvError>;

/// Persistence adapter failure.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// The connection is missing the migrated `kv` table.
    MissingRequiredTable(&'static str),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "storage is missing required table `{table}`")
            }
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value storage for opaque string blobs.
pub trait KvStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    /// Writes `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> KvResult<()>;
}

/// SQLite-backed key-value store.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Wraps a migrated connection after verifying the expected schema.
    pub fn new(conn: Connection) -> KvResult<Self> {
        if !table_exists(&conn, "kv")? {
            return Err(KvError::MissingRequiredTable("kv"));
        }
        Ok(Self { conn })
    }

    /// Opens (and migrates) a database file and wraps it.
    pub fn open(path: impl AsRef<Path>) -> KvResult<Self> {
        Self::new(open_db(path)?)
    }

    /// Opens an in-memory database, mainly for tests.
    pub fn open_in_memory() -> KvResult<Self> {
        Self::new(open_db_in_memory()?)
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> KvResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
