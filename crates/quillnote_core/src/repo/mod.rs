//! Persistence adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the key-value contract the core persists opaque blobs through.
//! - Isolate SQLite details from settings/snapshot callers.

pub mod kv_repo;
