//! Tag index: distinct tags in use plus display counts.
//!
//! # Responsibility
//! - Derive the tag universe from the full note collection.
//! - Serve substring suggestions bounded to a small fixed count.
//!
//! # Invariants
//! - Iteration order is first-seen order across the store, not alphabetical
//!   and not frequency-ranked. Suggestion order follows iteration order.

use crate::model::note::Note;
use std::collections::HashMap;

/// Upper bound on suggestion results.
pub const MAX_SUGGESTIONS: usize = 5;

/// One distinct tag and the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Read-only derived view over all tags in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    entries: Vec<TagCount>,
}

impl TagIndex {
    /// Recomputes the index from a full store snapshot.
    ///
    /// Runs in O(total tags across all notes); a name-to-slot map keeps the
    /// first-seen entry order without quadratic scans.
    pub fn recompute(notes: &[Note]) -> Self {
        let mut entries: Vec<TagCount> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for note in notes {
            for tag in &note.tags {
                match slots.get(tag.as_str()).copied() {
                    Some(slot) => entries[slot].count += 1,
                    None => {
                        slots.insert(tag.clone(), entries.len());
                        entries.push(TagCount {
                            name: tag.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }

        Self { entries }
    }

    /// All entries in first-seen order.
    pub fn entries(&self) -> &[TagCount] {
        &self.entries
    }

    /// Iterates tag names in first-seen order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Returns whether the tag is in use by any note.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == tag)
    }

    /// Number of notes carrying the tag; zero when unknown.
    pub fn count(&self, tag: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.name == tag)
            .map_or(0, |entry| entry.count)
    }

    /// Number of distinct tags in use.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no tags are in use.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to [`MAX_SUGGESTIONS`] tags containing `input`
    /// (case-insensitive), excluding any tag in `exclude`.
    ///
    /// Blank input yields no suggestions. Result order is index iteration
    /// order.
    pub fn suggest(&self, input: &str, exclude: &[String]) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .map(|entry| entry.name.as_str())
            .filter(|tag| tag.contains(needle.as_str()))
            .filter(|tag| !exclude.iter().any(|excluded| excluded == tag))
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}
