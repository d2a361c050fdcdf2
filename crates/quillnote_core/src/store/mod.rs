//! Authoritative in-memory note collection.
//!
//! # Responsibility
//! - Hold the process-wide note list and its commit/delete semantics.
//! - Provide the fixed seed set and the JSON snapshot used at startup.
//!
//! # Invariants
//! - At most one note per `NoteId`.
//! - A blank note (empty title and content) is never committed.

pub mod note_store;
pub mod seed;
pub mod snapshot;
