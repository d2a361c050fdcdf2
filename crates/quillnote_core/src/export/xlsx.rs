//! Spreadsheet backup of the note collection.
//!
//! # Responsibility
//! - Write the full note list as one tabular sheet.
//! - Read a previously exported sheet back into notes.
//!
//! # Invariants
//! - Column layout is fixed: `ID, Title, Content, Tags, Created At,
//!   Updated At`; timestamps are RFC 3339, tags comma-joined.
//! - Reading re-splits tags on commas and normalizes them, so a round-trip
//!   reconstructs id, title, content and tag set exactly.
//! - A failed export never leaves a partial file behind: bytes are built in
//!   memory and written in one step.

use crate::model::note::{normalize_tags, Note, NoteId};
use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File name of the downloadable backup.
pub const BACKUP_FILE_NAME: &str = "personal-notes.xlsx";
/// Sheet holding the note table.
pub const SHEET_NAME: &str = "Notes";

const HEADERS: [&str; 6] = ["ID", "Title", "Content", "Tags", "Created At", "Updated At"];

/// Backup serialization failure.
#[derive(Debug)]
pub enum ExportError {
    /// The spreadsheet library rejected the workbook.
    Spreadsheet(String),
    /// The workbook lacks the expected sheet.
    MissingSheet(&'static str),
    /// A data cell could not be decoded.
    InvalidCell {
        row: u32,
        column: &'static str,
        message: String,
    },
    /// Writing the backup file failed.
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spreadsheet(message) => write!(f, "spreadsheet error: {message}"),
            Self::MissingSheet(name) => write!(f, "backup sheet `{name}` not found"),
            Self::InvalidCell {
                row,
                column,
                message,
            } => write!(f, "invalid `{column}` value in row {row}: {message}"),
            Self::Io(err) => write!(f, "failed to write backup file: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Serializes the note list to xlsx bytes.
pub fn write_backup(notes: &[Note]) -> Result<Vec<u8>, ExportError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or(ExportError::MissingSheet(SHEET_NAME))?;
    sheet.set_name(SHEET_NAME);

    for (idx, header) in HEADERS.iter().enumerate() {
        let cell = sheet.get_cell_mut(((idx as u32) + 1, 1));
        cell.set_value(*header);
        cell.get_style_mut().get_font_mut().set_bold(true);
    }

    for (idx, note) in notes.iter().enumerate() {
        let row = (idx as u32) + 2;
        sheet.get_cell_mut((1, row)).set_value(note.id.to_string());
        sheet.get_cell_mut((2, row)).set_value(note.title.as_str());
        sheet
            .get_cell_mut((3, row))
            .set_value(note.content.as_str());
        sheet.get_cell_mut((4, row)).set_value(note.tags.join(", "));
        sheet
            .get_cell_mut((5, row))
            .set_value(iso_timestamp(note.created_at));
        sheet
            .get_cell_mut((6, row))
            .set_value(iso_timestamp(note.updated_at));
    }

    let mut buf = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buf)
        .map_err(|err| ExportError::Spreadsheet(err.to_string()))?;
    Ok(buf.into_inner())
}

/// Writes the backup into `dir` under [`BACKUP_FILE_NAME`].
pub fn write_backup_file(notes: &[Note], dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = write_backup(notes)?;
    let path = dir.join(BACKUP_FILE_NAME);
    std::fs::write(&path, bytes)?;
    info!(
        "event=backup_export module=export status=ok count={} path={}",
        notes.len(),
        path.display()
    );
    Ok(path)
}

/// Reads a previously exported backup back into notes.
///
/// Fully blank rows are skipped; any malformed id or timestamp fails the
/// whole read (no partially decoded collection).
pub fn read_backup(bytes: &[u8]) -> Result<Vec<Note>, ExportError> {
    let cursor = Cursor::new(bytes.to_vec());
    let book = umya_spreadsheet::reader::xlsx::read_reader(cursor, true)
        .map_err(|err| ExportError::Spreadsheet(err.to_string()))?;

    let sheet = book
        .get_sheet_collection()
        .iter()
        .find(|sheet| sheet.get_name() == SHEET_NAME)
        .ok_or(ExportError::MissingSheet(SHEET_NAME))?;

    let (_, max_row) = sheet.get_highest_column_and_row();
    let mut notes = Vec::new();

    for row in 2..=max_row {
        let value_at = |col: u32| -> String {
            sheet
                .get_cell((col, row))
                .map(|cell| cell.get_value().to_string())
                .unwrap_or_default()
        };

        let id_text = value_at(1);
        let title = value_at(2);
        let content = value_at(3);
        let tags_text = value_at(4);
        let created_text = value_at(5);
        let updated_text = value_at(6);

        let all_blank = [&id_text, &title, &content, &tags_text, &created_text]
            .iter()
            .all(|value| value.trim().is_empty());
        if all_blank {
            continue;
        }

        notes.push(Note {
            id: parse_id(&id_text, row)?,
            title,
            content,
            tags: normalize_tags(tags_text.split(',')),
            created_at: parse_timestamp(&created_text, row, "Created At")?,
            updated_at: parse_timestamp(&updated_text, row, "Updated At")?,
        });
    }

    Ok(notes)
}

fn iso_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_id(value: &str, row: u32) -> Result<NoteId, ExportError> {
    Uuid::parse_str(value.trim()).map_err(|err| ExportError::InvalidCell {
        row,
        column: "ID",
        message: err.to_string(),
    })
}

fn parse_timestamp(
    value: &str,
    row: u32,
    column: &'static str,
) -> Result<DateTime<Utc>, ExportError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| ExportError::InvalidCell {
            row,
            column,
            message: err.to_string(),
        })
}
