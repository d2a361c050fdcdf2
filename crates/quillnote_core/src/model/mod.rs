//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical note record used by store, session and export.
//! - Own tag normalization and commit-time validation rules.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Tag lists never contain empty or duplicate entries.

pub mod note;
