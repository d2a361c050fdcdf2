//! Query engine: free-text search plus tag filtering.
//!
//! # Responsibility
//! - Hold the transient per-session filter state.
//! - Produce the filtered note view in store order.
//!
//! # Invariants
//! - Filtering is a stateless pure function over a store snapshot; it never
//!   mutates notes or their order.
//! - An empty query and an empty tag set both match every note.

use crate::model::note::Note;
use std::collections::BTreeSet;

/// Transient per-session filter state. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, stored lowercased.
    query: String,
    /// Required tags; a note matches by intersecting ANY of them.
    required_tags: BTreeSet<String>,
}

impl FilterState {
    /// Creates an empty filter matching every note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the free-text query. Input is lowercased once here so the
    /// per-note match stays a plain substring test.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.to_lowercase();
    }

    /// Current lowercased query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Toggles a tag in the required set. Returns whether the tag is
    /// selected after the call.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.required_tags.remove(tag) {
            false
        } else {
            self.required_tags.insert(tag.to_string());
            true
        }
    }

    /// Returns whether the tag is currently required.
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.required_tags.contains(tag)
    }

    /// Currently required tags.
    pub fn required_tags(&self) -> &BTreeSet<String> {
        &self.required_tags
    }

    /// Clears both the query and the required tag set.
    pub fn clear(&mut self) {
        self.query.clear();
        self.required_tags.clear();
    }

    /// Returns whether the filter matches every note.
    pub fn is_neutral(&self) -> bool {
        self.query.is_empty() && self.required_tags.is_empty()
    }
}

/// Filters a store snapshot against the given state, preserving store order.
///
/// A note matches the query when the query is empty or is a lowercase
/// substring of its title or content. A note matches the tag set when the set
/// is empty or the note carries at least one required tag.
pub fn filter_notes<'a>(notes: &'a [Note], filter: &FilterState) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| matches_query(note, filter.query()) && matches_tags(note, filter))
        .collect()
}

fn matches_query(note: &Note, query: &str) -> bool {
    query.is_empty()
        || note.title.to_lowercase().contains(query)
        || note.content.to_lowercase().contains(query)
}

fn matches_tags(note: &Note, filter: &FilterState) -> bool {
    let required = filter.required_tags();
    required.is_empty() || note.tags.iter().any(|tag| required.contains(tag))
}
