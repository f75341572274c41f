//! Renders dispatch results for the terminal.

use crate::advisory::{CropAdvice, WeatherRecord, SIMULATION_NOTICE};
use crate::cli::output;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::currency::format_amount;
use crate::ledger::{LedgerEntry, LedgerSummary};
use crate::notebook::NoteEntry;
use crate::session::View;

const DESCRIPTION_WIDTH: usize = 40;

pub fn render(view: &View<'_>, currency: &str) {
    match view {
        View::EntryRecorded => output::success("Transaction recorded."),
        View::NoteRecorded => output::success("Note added."),
        View::EmptyLedger => {
            output::section("Financial summary");
            output::info("No transactions recorded yet.");
        }
        View::Ledger { summary, entries } => render_ledger(summary, entries, currency),
        View::Notes(notes) => render_notes(notes),
        View::Weather(record) => render_weather(record),
        View::CropAdvice(advice) => render_crop_advice(advice),
    }
}

fn render_ledger(summary: &LedgerSummary, entries: &[LedgerEntry], currency: &str) {
    output::section("Financial summary");
    for line in metric_lines(summary, currency) {
        output::info(line);
    }
    output::separator();
    output::info(ledger_table(entries, currency).render());
}

pub fn metric_lines(summary: &LedgerSummary, currency: &str) -> Vec<String> {
    vec![
        format!("Total income : {}", format_amount(summary.income, currency)),
        format!("Total expense: {}", format_amount(summary.expense, currency)),
        format!("Net balance  : {}", format_amount(summary.net, currency)),
    ]
}

pub fn ledger_table(entries: &[LedgerEntry], currency: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Date"),
        TableColumn::left("Kind"),
        TableColumn::left("Description").with_max_width(DESCRIPTION_WIDTH),
        TableColumn::right("Amount"),
    ]);
    for (idx, entry) in entries.iter().enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            entry.date.format("%Y-%m-%d").to_string(),
            entry.kind.label().to_string(),
            entry.description.clone(),
            format_amount(entry.amount, currency),
        ]);
    }
    table
}

fn render_notes(notes: &[&NoteEntry]) {
    output::section("Saved notes");
    if notes.is_empty() {
        output::info("No notes yet.");
        return;
    }
    for note in notes {
        output::info(note_line(note));
    }
}

pub fn note_line(note: &NoteEntry) -> String {
    format!("- {}: {}", note.timestamp, note.body)
}

fn render_weather(record: &WeatherRecord) {
    output::section(format!("Weather: {}", record.region.label()));
    output::info(SIMULATION_NOTICE);
    for line in weather_lines(record) {
        output::info(line);
    }
    output::warning(format!("Farmer advisory: {}", record.advisory));
}

pub fn weather_lines(record: &WeatherRecord) -> Vec<String> {
    vec![
        format!("Condition  : {}", record.condition),
        format!("Temperature: {}", record.temperature),
        format!("Humidity   : {}", record.humidity),
        format!("Wind       : {}", record.wind),
    ]
}

fn render_crop_advice(advice: &CropAdvice) {
    output::section(format!("Tips for {}", advice.crop.label()));
    for line in advice.text().lines() {
        output::info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::{weather, Region};
    use crate::ledger::EntryKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn metrics_use_currency_formatting() {
        let summary = LedgerSummary {
            income: Decimal::from(5000),
            expense: Decimal::from(1200),
            net: Decimal::from(3800),
        };
        let lines = metric_lines(&summary, "TL");
        assert_eq!(lines[0], "Total income : 5,000.00 TL");
        assert_eq!(lines[2], "Net balance  : 3,800.00 TL");
    }

    #[test]
    fn ledger_table_numbers_rows_in_insertion_order() {
        let entries = vec![
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                EntryKind::Income,
                "Crop sale",
                Decimal::from(5000),
            ),
            LedgerEntry::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                EntryKind::Expense,
                "Fertilizer",
                Decimal::from(1200),
            ),
        ];
        let table = ledger_table(&entries, "TL");
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[1][3], "Fertilizer");
        assert_eq!(table.rows[1][4], "1,200.00 TL");
    }

    #[test]
    fn weather_lines_show_every_measurement() {
        let lines = weather_lines(weather::lookup(Region::Karadeniz));
        assert_eq!(
            lines,
            vec![
                "Condition  : Yağmurlu",
                "Temperature: 16°C",
                "Humidity   : %85",
                "Wind       : 5 km/s",
            ]
        );
    }
}
