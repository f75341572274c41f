use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FarmError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub description: String,
    pub amount: Decimal,
}

impl LedgerEntry {
    pub fn new(
        date: NaiveDate,
        kind: EntryKind,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            kind,
            description: description.into(),
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, EntryKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, EntryKind::Expense)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the English names as well as the Turkish `gelir`/`gider`.
impl FromStr for EntryKind {
    type Err = FarmError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "income" | "in" | "gelir" => Ok(EntryKind::Income),
            "expense" | "out" | "gider" => Ok(EntryKind::Expense),
            _ => Err(FarmError::UnknownEntryKind(raw.to_string())),
        }
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FarmError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FarmError::InvalidDate(raw.to_string()))
}

/// Parses a decimal amount, ignoring `,` thousands separators.
pub fn parse_amount(raw: &str) -> Result<Decimal, FarmError> {
    let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
    Decimal::from_str(&cleaned).map_err(|_| FarmError::InvalidAmount(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amounts_with_grouping() {
        assert_eq!(parse_amount("1,200.50").unwrap(), Decimal::new(120050, 2));
        assert_eq!(parse_amount(" 5000 ").unwrap(), Decimal::from(5000));
        assert!(parse_amount("five").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2024-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(matches!(parse_date("02.01.2024"), Err(FarmError::InvalidDate(_))));
    }

    #[test]
    fn parses_english_and_turkish_kinds() {
        assert_eq!("Income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("gider".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert_eq!(" EXPENSE ".parse::<EntryKind>().unwrap(), EntryKind::Expense);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "transfer".parse::<EntryKind>().expect_err("unknown kind");
        assert!(err.to_string().contains("transfer"));
    }
}
