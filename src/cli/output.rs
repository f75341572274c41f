use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            plain_mode: config.plain_mode,
            quiet_mode: config.quiet_mode,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Separator | MessageKind::Hint)
}

fn icon(kind: MessageKind, prefs: &OutputPreferences) -> &'static str {
    if prefs.plain_mode {
        return match kind {
            MessageKind::Success => "OK:",
            MessageKind::Warning => "WARNING:",
            MessageKind::Error => "ERROR:",
            MessageKind::Hint => "HINT:",
            _ => "",
        };
    }
    match kind {
        MessageKind::Success => "✔",
        MessageKind::Warning => "⚠",
        MessageKind::Error => "✖",
        MessageKind::Hint => "›",
        _ => "",
    }
}

pub(crate) fn style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => {
            let ch = if prefs.plain_mode { "-" } else { "─" };
            ch.repeat(40)
        }
        _ => {
            let icon = icon(kind, prefs);
            if icon.is_empty() {
                text
            } else {
                format!("{icon} {text}")
            }
        }
    };

    if prefs.plain_mode {
        return base;
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Hint => base.dimmed().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info | MessageKind::Separator => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    let formatted = style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        MessageKind::Error => eprintln!("{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_uses_text_labels() {
        let prefs = OutputPreferences {
            plain_mode: true,
            quiet_mode: false,
        };
        assert_eq!(style(MessageKind::Success, "Saved", &prefs), "OK: Saved");
        assert_eq!(style(MessageKind::Section, " Notes ", &prefs), "=== Notes ===");
        assert_eq!(style(MessageKind::Separator, "", &prefs), "-".repeat(40));
    }

    #[test]
    fn quiet_mode_drops_decoration_only() {
        let prefs = OutputPreferences {
            plain_mode: false,
            quiet_mode: true,
        };
        assert!(should_skip(MessageKind::Separator, &prefs));
        assert!(should_skip(MessageKind::Hint, &prefs));
        assert!(!should_skip(MessageKind::Error, &prefs));
    }
}
