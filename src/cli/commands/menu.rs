//! `menu`: panel-driven navigation over the same session actions the typed
//! commands use.

use chrono::Local;

use crate::cli::commands::{advisory, CommandDefinition};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell_context::{CommandResult, ShellContext};
use crate::session::{Action, Panel};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "menu",
        "Browse the farm panels interactively",
        "menu",
        cmd_menu,
    )]
}

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_interactive("menu")?;
    while let Some(panel) = forms::select_panel(&context.theme)? {
        output::separator();
        match panel {
            Panel::Ledger => ledger_panel(context)?,
            Panel::Notebook => notebook_panel(context)?,
            Panel::Weather => advisory::show_weather_picker(context)?,
            Panel::Crops => advisory::show_crop_picker(context)?,
        }
    }
    Ok(())
}

fn ledger_panel(context: &mut ShellContext) -> CommandResult {
    context.apply(Action::ShowLedger)?;
    if !forms::panel_action(&context.theme, "Add transaction")? {
        return Ok(());
    }
    let today = Local::now().date_naive();
    if let Some(action) = forms::ledger_entry(&context.theme, today)? {
        record(context, action)?;
        context.apply(Action::ShowLedger)?;
    }
    Ok(())
}

fn notebook_panel(context: &mut ShellContext) -> CommandResult {
    context.apply(Action::ShowNotes)?;
    if !forms::panel_action(&context.theme, "Add note")? {
        return Ok(());
    }
    let action = forms::note(&context.theme)?;
    record(context, action)?;
    context.apply(Action::ShowNotes)
}

/// Rejected input is reported in place so the panel loop keeps going.
fn record(context: &mut ShellContext, action: Action) -> CommandResult {
    if let Err(err) = context.apply(action) {
        context.report_error(err);
    }
    Ok(())
}
