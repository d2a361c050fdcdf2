//! Fixed seed notes for first launch.
//!
//! # Responsibility
//! - Provide the example notes shown when no persisted snapshot exists.
//!
//! # Invariants
//! - Seed ids and timestamps are fixed, so first-launch state is
//!   deterministic and addressable in tests.

use crate::model::note::Note;
use chrono::{DateTime, Utc};
use uuid::Uuid;

const GETTING_STARTED_ID: &str = "5f0c1f3a-9d2e-4c41-8b67-0a1f2d3c4e01";
const SYNTAX_GUIDE_ID: &str = "5f0c1f3a-9d2e-4c41-8b67-0a1f2d3c4e02";
const PROJECT_IDEAS_ID: &str = "5f0c1f3a-9d2e-4c41-8b67-0a1f2d3c4e03";

/// Returns the three example notes used when the store starts empty.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note {
            id: seed_id(GETTING_STARTED_ID),
            title: "Getting Started with the Notes App".to_string(),
            content: "# Welcome to Your Personal Notes App\n\n\
                This is a lightweight notes application with the following features:\n\n\
                ## Key Features\n\
                - **Tagging System**: Organize notes with tags\n\
                - **Search**: Find notes quickly\n\
                - **Dark Mode**: Toggle between light and dark themes\n\
                - **Spreadsheet Export**: Download your notes as a single file\n\
                - **Remote Backup**: Keep a copy in a repository you control\n\n\
                ## First Steps\n\
                1. Create a new note\n\
                2. Write your content\n\
                3. Add tags to organize your notes\n\
                4. Use the search bar to find specific notes\n\n\
                *Happy note-taking!*"
                .to_string(),
            tags: vec![
                "getting-started".to_string(),
                "tutorial".to_string(),
                "features".to_string(),
            ],
            created_at: seed_ts("2025-08-09T14:00:00Z"),
            updated_at: seed_ts("2025-08-09T14:00:00Z"),
        },
        Note {
            id: seed_id(SYNTAX_GUIDE_ID),
            title: "Markdown Syntax Guide".to_string(),
            content: "# Markdown Quick Reference\n\n\
                ## Headers\n\
                ```markdown\n# H1 Header\n## H2 Header\n### H3 Header\n```\n\n\
                ## Text Formatting\n\
                - **Bold text**\n\
                - *Italic text*\n\
                - `Inline code`\n\n\
                ## Links and Images\n\
                [Link text](https://example.com)\n\
                ![Alt text](image-url)\n\n\
                > This is a blockquote\n\n\
                ---\n\n\
                *Use these syntax elements to format your notes beautifully!*"
                .to_string(),
            tags: vec![
                "markdown".to_string(),
                "reference".to_string(),
                "syntax".to_string(),
                "tutorial".to_string(),
            ],
            created_at: seed_ts("2025-08-09T14:05:00Z"),
            updated_at: seed_ts("2025-08-09T14:05:00Z"),
        },
        Note {
            id: seed_id(PROJECT_IDEAS_ID),
            title: "Project Ideas".to_string(),
            content: "# Project Ideas for Development\n\n\
                ## Web Applications\n\
                - [ ] Personal dashboard\n\
                - [ ] Task management system\n\
                - [ ] Recipe organizer\n\n\
                ## Mobile Apps\n\
                - [ ] Habit tracker\n\
                - [ ] Expense tracker\n\n\
                ## Learning Goals\n\
                1. Master frontend frameworks\n\
                2. Learn backend design\n\
                3. Practice responsive layouts\n\n\
                **Priority**: Focus on web applications first, then expand to mobile development."
                .to_string(),
            tags: vec![
                "projects".to_string(),
                "ideas".to_string(),
                "development".to_string(),
                "todo".to_string(),
            ],
            created_at: seed_ts("2025-08-09T14:10:00Z"),
            updated_at: seed_ts("2025-08-09T14:15:00Z"),
        },
    ]
}

fn seed_id(value: &str) -> Uuid {
    Uuid::parse_str(value).expect("valid seed uuid")
}

fn seed_ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid seed timestamp")
        .with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::seed_notes;

    #[test]
    fn seed_ids_are_unique_and_fixed() {
        let first = seed_notes();
        let second = seed_notes();
        assert_eq!(first, second);
        for (i, a) in first.iter().enumerate() {
            for b in &first[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn seed_tags_are_normalized() {
        for note in seed_notes() {
            for tag in &note.tags {
                assert_eq!(*tag, tag.trim().to_lowercase());
            }
            assert!(note.updated_at >= note.created_at);
        }
    }
}
