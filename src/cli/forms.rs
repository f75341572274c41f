//! Interactive prompts that turn terminal input into session actions.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_decimal::Decimal;

use crate::advisory::{Crop, Region};
use crate::cli::shell_context::CommandError;
use crate::ledger::{parse_amount, parse_date, EntryKind};
use crate::session::{Action, Panel};

/// Collects one ledger transaction. Returns `None` when the user backs out of
/// the kind selector.
pub fn ledger_entry(theme: &ColorfulTheme, today: NaiveDate) -> Result<Option<Action>, CommandError> {
    let date_text: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            parse_date(input).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;
    let date = parse_date(&date_text)?;

    let kinds: Vec<&str> = EntryKind::ALL.iter().map(|kind| kind.label()).collect();
    let Some(kind_index) = Select::with_theme(theme)
        .with_prompt("Transaction type")
        .items(&kinds)
        .default(0)
        .interact_opt()?
    else {
        return Ok(None);
    };
    let kind = EntryKind::ALL[kind_index];

    let description: String = Input::with_theme(theme)
        .with_prompt("Description (e.g. fertilizer purchase, crop sale)")
        .allow_empty(true)
        .interact_text()?;

    let amount_text: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .default("0".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            match parse_amount(input) {
                Ok(amount) if amount < Decimal::ZERO => Err("Amount cannot be negative".into()),
                Ok(_) => Ok(()),
                Err(err) => Err(err.to_string()),
            }
        })
        .interact_text()?;
    let amount = parse_amount(&amount_text)?;

    Ok(Some(Action::AddEntry {
        date,
        kind,
        description: description.trim().to_string(),
        amount,
    }))
}

pub fn note(theme: &ColorfulTheme) -> Result<Action, CommandError> {
    let body: String = Input::with_theme(theme)
        .with_prompt("Note (e.g. field 3 needs watering)")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Note cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(Action::AddNote { body })
}

pub fn select_panel(theme: &ColorfulTheme) -> Result<Option<Panel>, CommandError> {
    let items: Vec<String> = Panel::ALL
        .iter()
        .map(|panel| format!("{:<18} {}", panel.label(), panel.description()))
        .collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Farm panel (ESC to leave)")
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| Panel::ALL[index]))
}

pub fn select_region(theme: &ColorfulTheme) -> Result<Option<Region>, CommandError> {
    let labels: Vec<&str> = Region::ALL.iter().map(|region| region.label()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Select your region")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| Region::ALL[index]))
}

pub fn select_crop(theme: &ColorfulTheme) -> Result<Option<Crop>, CommandError> {
    let labels: Vec<&str> = Crop::ALL.iter().map(|crop| crop.label()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Which crop do you want advice for?")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| Crop::ALL[index]))
}

/// Follow-up choice shown under a panel.
pub fn panel_action(theme: &ColorfulTheme, primary: &str) -> Result<bool, CommandError> {
    let items = [primary, "Back to panels"];
    let choice = Select::with_theme(theme)
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(choice == Some(0))
}
