use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::commands::{self, CommandDefinition, CommandRegistry};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::ui::panels;
use crate::config::{Config, ConfigManager};
use crate::errors::FarmError;
use crate::notebook::Notebook;
use crate::session::{Action, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell errors; these end the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FarmError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Per-command failures; reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] FarmError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences::from(&config));
        let notebook = Notebook::new().with_timestamp_format(&config.note_timestamp_format)?;
        tracing::info!(?mode, "session started");

        Ok(Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            session: Session::with_notebook(notebook),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        let arrow = if self.config.plain_mode { ">" } else { "⮞" };
        format!("farm {arrow} ")
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    /// Runs one session action and renders its view.
    pub fn apply(&mut self, action: Action) -> CommandResult {
        let view = self.session.dispatch(action)?;
        panels::render(&view, &self.config.currency);
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|definition| definition.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => {
                tracing::warn!(error = %other, "command failed");
                output::error(other);
            }
        }
    }

    pub(crate) fn require_interactive(&self, command: &str) -> CommandResult {
        if self.is_interactive() {
            Ok(())
        } else {
            Err(CommandError::InvalidArguments(format!(
                "`{command}` needs an interactive terminal; pass arguments instead."
            )))
        }
    }
}
