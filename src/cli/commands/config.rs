use crate::cli::commands::CommandDefinition;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::shell_context::{CommandError, CommandResult, ShellContext};
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "View and change CLI preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    Config::KEYS.join("|")
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            set_config_value(context, &key, value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{other}`. Available: show, set"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::info(format!("  {key:<22}: {value}"));
    }
    output::hint(format!("Stored at {}", context.config_manager.path().display()));
}

/// Validates, persists, then applies the new value to the running session.
fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;

    if updated.note_timestamp_format != context.config.note_timestamp_format {
        context
            .session
            .notebook
            .set_timestamp_format(&updated.note_timestamp_format)?;
    }
    output::set_preferences(OutputPreferences::from(&updated));
    context.config = updated;

    tracing::info!(key, "configuration updated");
    output::success(format!("`{key}` updated."));
    Ok(())
}
