//! `ledger` command: summary, new transactions, and JSON export.

use chrono::Local;

use crate::cli::commands::CommandDefinition;
use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell_context::{CommandError, CommandResult, ShellContext};
use crate::ledger::{parse_amount, parse_date, EntryKind};
use crate::session::Action;

const USAGE: &str = "ledger [add <YYYY-MM-DD> <income|expense> <description> <amount> | export]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "ledger",
        "Income/expense summary and transactions",
        USAGE,
        cmd_ledger,
    )]
}

fn cmd_ledger(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((subcommand, rest)) = args.split_first() else {
        return context.apply(Action::ShowLedger);
    };

    match subcommand.to_ascii_lowercase().as_str() {
        "show" | "summary" => context.apply(Action::ShowLedger),
        "add" => handle_add(context, rest),
        "export" => handle_export(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown ledger subcommand `{other}`. Available: show, add, export"
        ))),
    }
}

pub(crate) fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        context.require_interactive("ledger add")?;
        let today = Local::now().date_naive();
        return match forms::ledger_entry(&context.theme, today)? {
            Some(action) => context.apply(action),
            None => {
                output::info("Transaction discarded.");
                Ok(())
            }
        };
    }

    let action = parse_add_args(args)?;
    context.apply(action)
}

/// `<date> <kind> <description...> <amount>`; the description may span several
/// words when it is not quoted.
fn parse_add_args(args: &[&str]) -> Result<Action, CommandError> {
    if args.len() < 4 {
        return Err(CommandError::InvalidArguments(format!("usage: {USAGE}")));
    }
    let date = parse_date(args[0])?;
    let kind: EntryKind = args[1].parse()?;
    let amount = parse_amount(args[args.len() - 1])?;
    let description = args[2..args.len() - 1].join(" ");
    Ok(Action::AddEntry {
        date,
        kind,
        description,
        amount,
    })
}

fn handle_export(context: &mut ShellContext) -> CommandResult {
    let json = context.session.ledger.to_json()?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn add_args_join_unquoted_description() {
        let action =
            parse_add_args(&["2024-01-02", "gider", "Gübre", "alımı", "1200"]).unwrap();
        assert_eq!(
            action,
            Action::AddEntry {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                kind: EntryKind::Expense,
                description: "Gübre alımı".into(),
                amount: Decimal::from(1200),
            }
        );
    }

    #[test]
    fn add_args_require_all_fields() {
        let err = parse_add_args(&["2024-01-02", "income", "5000"]).expect_err("too short");
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn add_args_surface_parse_errors() {
        let err = parse_add_args(&["yesterday", "income", "Sale", "10"]).expect_err("bad date");
        assert!(err.to_string().contains("yesterday"));
    }
}
