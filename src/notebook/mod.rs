//! Append-only notebook of timestamped free-text notes.

pub mod clock;

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

pub use clock::{Clock, FixedClock, SystemClock};

use crate::errors::{FarmError, Result};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub timestamp: String,
    pub body: String,
}

pub struct Notebook {
    notes: Vec<NoteEntry>,
    clock: Box<dyn Clock>,
    timestamp_format: String,
}

impl Notebook {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            notes: Vec::new(),
            clock,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Replaces the strftime pattern used for new notes. Existing notes keep
    /// the text they were stamped with.
    pub fn with_timestamp_format(mut self, format: &str) -> Result<Self> {
        self.set_timestamp_format(format)?;
        Ok(self)
    }

    pub fn set_timestamp_format(&mut self, format: &str) -> Result<()> {
        validate_timestamp_format(format)?;
        self.timestamp_format = format.to_string();
        Ok(())
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Stamps `body` with the current time and appends it.
    pub fn add_note(&mut self, body: impl Into<String>) -> Result<&NoteEntry> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(FarmError::EmptyNote);
        }
        let timestamp = self
            .clock
            .now()
            .format(&self.timestamp_format)
            .to_string();
        tracing::debug!(%timestamp, "note recorded");
        self.notes.push(NoteEntry { timestamp, body });
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Notes from most to least recent. Each call starts a fresh pass.
    pub fn notes_newest_first(&self) -> impl DoubleEndedIterator<Item = &NoteEntry> + '_ {
        self.notes.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Notebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notebook")
            .field("notes", &self.notes)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

/// Rejects patterns chrono cannot render.
pub fn validate_timestamp_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(FarmError::Config("timestamp format must not be empty".into()));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FarmError::Config(format!(
            "invalid timestamp format `{format}`"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_notebook() -> Notebook {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        Notebook::with_clock(Box::new(FixedClock::at(naive)))
    }

    #[test]
    fn stamps_notes_with_day_first_format() {
        let mut notebook = fixed_notebook();
        let note = notebook
            .add_note("3 numaralı tarlaya su verilecek")
            .unwrap();
        assert_eq!(note.timestamp, "09-03-2024 07:05");
        assert_eq!(note.body, "3 numaralı tarlaya su verilecek");
    }

    #[test]
    fn lists_newest_first_and_restarts() {
        let mut notebook = fixed_notebook();
        for body in ["A", "B", "C"] {
            notebook.add_note(body).unwrap();
        }
        let first: Vec<_> = notebook
            .notes_newest_first()
            .map(|note| note.body.as_str())
            .collect();
        let second: Vec<_> = notebook
            .notes_newest_first()
            .map(|note| note.body.as_str())
            .collect();
        assert_eq!(first, ["C", "B", "A"]);
        assert_eq!(first, second);
    }

    #[test]
    fn blank_note_is_rejected() {
        let mut notebook = fixed_notebook();
        let err = notebook.add_note("   \n").expect_err("blank note");
        assert!(matches!(err, FarmError::EmptyNote));
        assert!(notebook.is_empty());
    }

    #[test]
    fn custom_timestamp_format_applies() {
        let mut notebook = fixed_notebook()
            .with_timestamp_format("%Y/%m/%d")
            .unwrap();
        let note = notebook.add_note("Hasat başladı").unwrap();
        assert_eq!(note.timestamp, "2024/03/09");
    }

    #[test]
    fn changing_format_keeps_existing_stamps() {
        let mut notebook = fixed_notebook();
        notebook.add_note("Gübre atıldı").unwrap();
        notebook.set_timestamp_format("%Y/%m/%d").unwrap();
        notebook.add_note("İlaçlama yapıldı").unwrap();

        let stamps: Vec<_> = notebook
            .notes_newest_first()
            .map(|note| note.timestamp.as_str())
            .collect();
        assert_eq!(stamps, ["2024/03/09", "09-03-2024 07:05"]);
        assert_eq!(notebook.timestamp_format(), "%Y/%m/%d");
    }

    #[test]
    fn rejected_format_leaves_current_one() {
        let mut notebook = fixed_notebook();
        assert!(notebook.set_timestamp_format("%Q").is_err());
        assert_eq!(notebook.timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn invalid_timestamp_format_is_rejected() {
        assert!(validate_timestamp_format("%Q").is_err());
        assert!(validate_timestamp_format("").is_err());
        assert!(validate_timestamp_format(DEFAULT_TIMESTAMP_FORMAT).is_ok());
    }
}
