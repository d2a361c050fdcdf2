//! List view models: note rows and the tag filter sidebar.
//!
//! # Responsibility
//! - Derive plain-text previews from markdown content.
//! - Format relative update labels.
//! - Rank the tag filter sidebar by usage count.
//!
//! # Invariants
//! - Output records carry no markup; escaping is the presentation layer's
//!   concern.
//! - The tag index itself stays insertion-ordered; count ranking is applied
//!   only here.

use crate::model::note::{Note, NoteId, UNTITLED_TITLE};
use crate::search::filter::FilterState;
use crate::tags::tag_index::TagIndex;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 150;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    /// Display title; blank titles render as the placeholder.
    pub title: String,
    /// Markdown-stripped summary of the content.
    pub preview: String,
    pub tags: Vec<String>,
    /// Relative label such as `Today` or `3 days ago`.
    pub updated_label: String,
}

/// One entry of the tag filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilterItem {
    pub name: String,
    pub count: usize,
    pub selected: bool,
}

/// Builds list rows for an already-filtered note view.
pub fn note_list_items(notes: &[&Note], now: DateTime<Utc>) -> Vec<NoteListItem> {
    notes
        .iter()
        .map(|note| NoteListItem {
            id: note.id,
            title: if note.title.trim().is_empty() {
                UNTITLED_TITLE.to_string()
            } else {
                note.title.clone()
            },
            preview: preview_text(&note.content),
            tags: note.tags.clone(),
            updated_label: relative_date_label(note.updated_at, now),
        })
        .collect()
}

/// Builds the sidebar entries, most-used tags first.
///
/// Ties keep index (first-seen) order; the sort is stable.
pub fn tag_filter_items(index: &TagIndex, filter: &FilterState) -> Vec<TagFilterItem> {
    let mut items: Vec<TagFilterItem> = index
        .entries()
        .iter()
        .map(|entry| TagFilterItem {
            name: entry.name.clone(),
            count: entry.count,
            selected: filter.is_tag_selected(&entry.name),
        })
        .collect();
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items
}

/// Derives a plain-text summary from markdown content.
///
/// Images are dropped, links keep their text, remaining markdown symbols are
/// stripped and whitespace collapsed; the result is capped at 150 chars with
/// a trailing ellipsis when truncated.
pub fn preview_text(content: &str) -> String {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();

    let mut preview: String = trimmed.chars().take(PREVIEW_MAX_CHARS).collect();
    if trimmed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Formats an update timestamp relative to `now`.
pub fn relative_date_label(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - updated_at).num_days();
    if days <= 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        updated_at.format("%Y-%m-%d").to_string()
    }
}
