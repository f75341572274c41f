pub mod commands;
pub mod forms;
pub mod help;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, SCRIPT_ENV};
