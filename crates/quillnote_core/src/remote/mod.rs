//! Remote backup collaborators.
//!
//! # Responsibility
//! - Verify connectivity against the remote hosting service before the user
//!   relies on it for backups.

pub mod github;
