use thiserror::Error;

/// Error type shared by the stores, lookups, and configuration layer.
#[derive(Debug, Error)]
pub enum FarmError {
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(rust_decimal::Decimal),
    #[error("Amount {0} would overflow the ledger total")]
    AmountOverflow(rust_decimal::Decimal),
    #[error("Note text must not be empty")]
    EmptyNote,
    #[error("Invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid amount `{0}`")]
    InvalidAmount(String),
    #[error("Unknown entry kind `{0}` (expected income or expense)")]
    UnknownEntryKind(String),
    #[error("Unknown region `{input}`{}", suggestion_suffix(.suggestion))]
    UnknownRegion {
        input: String,
        suggestion: Option<&'static str>,
    },
    #[error("Unknown crop `{input}`{}", suggestion_suffix(.suggestion))]
    UnknownCrop {
        input: String,
        suggestion: Option<&'static str>,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FarmError>;

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|name| format!(". Did you mean `{name}`?"))
        .unwrap_or_default()
}
