use crate::cli::commands::CommandDefinition;
use crate::cli::forms;
use crate::cli::shell_context::{CommandResult, ShellContext};
use crate::session::Action;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("notes", "Show saved notes, newest first", "notes", cmd_notes),
        CommandDefinition::new("note", "Add a note to the farm journal", "note <text...>", cmd_note),
    ]
}

fn cmd_notes(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply(Action::ShowNotes)
}

fn cmd_note(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        context.require_interactive("note")?;
        let action = forms::note(&context.theme)?;
        return context.apply(action);
    }
    context.apply(Action::AddNote {
        body: args.join(" "),
    })
}
