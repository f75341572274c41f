//! Per-session state and the single dispatch path that mutates it.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::advisory::{self, Crop, CropAdvice, Region, WeatherRecord};
use crate::errors::Result;
use crate::ledger::{EntryKind, LedgerEntry, LedgerStore, LedgerSummary};
use crate::notebook::{NoteEntry, Notebook};

/// The four panels reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Ledger,
    Notebook,
    Weather,
    Crops,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Ledger, Panel::Notebook, Panel::Weather, Panel::Crops];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Ledger => "Income & expenses",
            Panel::Notebook => "Notebook",
            Panel::Weather => "Weather",
            Panel::Crops => "Crop advice",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Panel::Ledger => "Record transactions and review the farm balance",
            Panel::Notebook => "Farm journal and notes",
            Panel::Weather => "Regional forecast (simulated)",
            Panel::Crops => "Tips per crop",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddEntry {
        date: NaiveDate,
        kind: EntryKind,
        description: String,
        amount: Decimal,
    },
    AddNote {
        body: String,
    },
    ShowLedger,
    ShowNotes,
    ShowWeather(Region),
    ShowCropAdvice(Crop),
}

/// What the front end should render after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    EntryRecorded,
    NoteRecorded,
    EmptyLedger,
    Ledger {
        summary: LedgerSummary,
        entries: &'a [LedgerEntry],
    },
    Notes(Vec<&'a NoteEntry>),
    Weather(&'static WeatherRecord),
    CropAdvice(&'static CropAdvice),
}

/// State owned by a single user session. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    pub ledger: LedgerStore,
    pub notebook: Notebook,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notebook(notebook: Notebook) -> Self {
        Self {
            ledger: LedgerStore::new(),
            notebook,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<View<'_>> {
        match action {
            Action::AddEntry {
                date,
                kind,
                description,
                amount,
            } => {
                self.ledger.add_entry(date, kind, description, amount)?;
                tracing::info!(entries = self.ledger.len(), "ledger updated");
                Ok(View::EntryRecorded)
            }
            Action::AddNote { body } => {
                self.notebook.add_note(body)?;
                tracing::info!(notes = self.notebook.len(), "notebook updated");
                Ok(View::NoteRecorded)
            }
            Action::ShowLedger => {
                if self.ledger.is_empty() {
                    Ok(View::EmptyLedger)
                } else {
                    Ok(View::Ledger {
                        summary: self.ledger.summary(),
                        entries: self.ledger.entries(),
                    })
                }
            }
            Action::ShowNotes => Ok(View::Notes(self.notebook.notes_newest_first().collect())),
            Action::ShowWeather(region) => Ok(View::Weather(advisory::weather::lookup(region))),
            Action::ShowCropAdvice(crop) => Ok(View::CropAdvice(advisory::crops::lookup(crop))),
        }
    }
}
