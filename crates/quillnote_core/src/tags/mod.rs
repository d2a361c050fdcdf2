//! Derived tag views over the note collection.
//!
//! # Responsibility
//! - Recompute the distinct-tag set and per-tag counts from store snapshots.
//! - Answer bounded suggestion queries for the tag input.
//!
//! # Invariants
//! - The index is never the source of truth; it is recomputed after every
//!   store mutation.

pub mod tag_index;
