//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of the application.
//! - Provide tag add/remove helpers with normalization semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `tags` preserves insertion order and holds no empty or duplicate values.
//! - `updated_at` is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Title substituted at commit time when the user left the title blank.
pub const UNTITLED_TITLE: &str = "Untitled Note";

/// A titled, tagged markdown document with creation/update timestamps.
///
/// Serialized field names follow the persisted JSON shape
/// (`createdAt`/`updatedAt`), so snapshots stay readable by external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable global ID used for lookup, replacement and export rows.
    pub id: NoteId,
    /// Free text; may be empty while a draft is being edited.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Lowercase trimmed labels, insertion order preserved for display.
    pub tags: Vec<String>,
    /// Set once at creation, never mutated afterwards.
    pub created_at: DateTime<Utc>,
    /// Set at creation and on every committed edit.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a blank draft with a fresh ID and both timestamps set to `now`.
    pub fn draft(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether both title and content are empty after trimming.
    ///
    /// Such a note must never reach the store; see [`ValidationError`].
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Appends the normalized form of `raw` to the tag list.
    ///
    /// Empty input and case-insensitive duplicates are rejected as no-ops.
    /// Returns whether the tag list changed.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes the exact normalized tag from the list.
    ///
    /// Removing a tag that is not present is a no-op. Returns whether the tag
    /// list changed.
    pub fn remove_tag(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        let before = self.tags.len();
        self.tags.retain(|existing| *existing != tag);
        self.tags.len() != before
    }
}

/// Commit-time validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Both title and content were empty after trimming.
    EmptyNote,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNote => write!(f, "note title or content is required"),
        }
    }
}

impl Error for ValidationError {}

/// Normalizes one tag value: trim, lowercase, reject empty.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes a sequence of raw tags, dropping empties and duplicates while
/// preserving first-seen order.
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for value in raw {
        if let Some(tag) = normalize_tag(value.as_ref()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, normalize_tags, Note};
    use chrono::Utc;

    #[test]
    fn draft_starts_blank_with_matching_timestamps() {
        let note = Note::draft(Utc::now());
        assert!(note.is_blank());
        assert!(note.tags.is_empty());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn add_tag_normalizes_and_rejects_duplicates() {
        let mut note = Note::draft(Utc::now());
        assert!(note.add_tag("  Work "));
        assert!(!note.add_tag("WORK"));
        assert!(!note.add_tag("   "));
        assert_eq!(note.tags, vec!["work".to_string()]);
    }

    #[test]
    fn remove_tag_is_noop_when_absent() {
        let mut note = Note::draft(Utc::now());
        note.add_tag("alpha");
        assert!(!note.remove_tag("beta"));
        assert!(note.remove_tag("Alpha"));
        assert!(note.tags.is_empty());
    }

    #[test]
    fn normalize_tags_preserves_first_seen_order() {
        let tags = normalize_tags(["Zeta", "alpha", "ZETA", " ", "beta"]);
        assert_eq!(tags, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn normalize_tag_rejects_whitespace_only() {
        assert_eq!(normalize_tag("  \t "), None);
        assert_eq!(normalize_tag(" MiXeD "), Some("mixed".to_string()));
    }
}
