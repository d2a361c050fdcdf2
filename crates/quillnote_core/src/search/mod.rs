//! Note filtering entry points.
//!
//! # Responsibility
//! - Expose the pure query function the rendering layer re-runs on every
//!   input change.
//! - Keep filter-state shaping inside core.

pub mod filter;
