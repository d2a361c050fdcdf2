//! Backup serialization.
//!
//! # Responsibility
//! - Serialize the note collection to a portable spreadsheet file and read
//!   it back.

pub mod xlsx;
