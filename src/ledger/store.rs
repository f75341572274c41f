use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::entry::{EntryKind, LedgerEntry};
use crate::errors::{FarmError, Result};

/// Append-only ledger of income and expense entries.
///
/// Totals are always derived from the stored entries; nothing is cached.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgerStore {
    entries: Vec<LedgerEntry>,
}

/// Point-in-time aggregates of a [`LedgerStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Negative amounts are rejected; zero is allowed.
    /// An entry that would push its kind's total past `Decimal::MAX` is
    /// rejected so the totals never overflow.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        kind: EntryKind,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(FarmError::NegativeAmount(amount));
        }
        if self.total_for(kind).checked_add(amount).is_none() {
            return Err(FarmError::AmountOverflow(amount));
        }
        let entry = LedgerEntry::new(date, kind, description, amount);
        tracing::debug!(%date, %kind, %amount, "ledger entry recorded");
        self.entries.push(entry);
        Ok(())
    }

    pub fn total_income(&self) -> Decimal {
        self.total_for(EntryKind::Income)
    }

    pub fn total_expense(&self) -> Decimal {
        self.total_for(EntryKind::Expense)
    }

    pub fn net_balance(&self) -> Decimal {
        self.total_income() - self.total_expense()
    }

    pub fn summary(&self) -> LedgerSummary {
        let income = self.total_income();
        let expense = self.total_expense();
        LedgerSummary {
            income,
            expense,
            net: income - expense,
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    fn total_for(&self, kind: EntryKind) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn empty_store_reports_zero_totals() {
        let store = LedgerStore::new();
        assert_eq!(store.total_income(), Decimal::ZERO);
        assert_eq!(store.total_expense(), Decimal::ZERO);
        assert_eq!(store.net_balance(), Decimal::ZERO);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn totals_follow_entry_kinds() {
        let mut store = LedgerStore::new();
        store
            .add_entry(date(1), EntryKind::Income, "Crop sale", Decimal::from(5000))
            .unwrap();
        store
            .add_entry(date(2), EntryKind::Expense, "Fertilizer", Decimal::from(1200))
            .unwrap();
        store
            .add_entry(date(3), EntryKind::Expense, "Diesel", Decimal::new(35050, 2))
            .unwrap();

        assert_eq!(store.total_income(), Decimal::from(5000));
        assert_eq!(store.total_expense(), Decimal::new(155050, 2));
        assert_eq!(store.net_balance(), Decimal::new(344950, 2));
        assert_eq!(
            store.summary(),
            LedgerSummary {
                income: store.total_income(),
                expense: store.total_expense(),
                net: store.net_balance(),
            }
        );
    }

    #[test]
    fn net_can_go_negative() {
        let mut store = LedgerStore::new();
        store
            .add_entry(date(5), EntryKind::Expense, "Tractor repair", Decimal::from(800))
            .unwrap();
        assert_eq!(store.net_balance(), Decimal::from(-800));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut store = LedgerStore::new();
        for day in 1..=5 {
            store
                .add_entry(
                    date(day),
                    EntryKind::Income,
                    format!("Sale {day}"),
                    Decimal::from(day),
                )
                .unwrap();
        }
        let descriptions: Vec<_> = store
            .entries()
            .iter()
            .map(|entry| entry.description.as_str())
            .collect();
        assert_eq!(descriptions, ["Sale 1", "Sale 2", "Sale 3", "Sale 4", "Sale 5"]);
    }

    #[test]
    fn negative_amount_is_rejected_without_side_effects() {
        let mut store = LedgerStore::new();
        let err = store
            .add_entry(date(1), EntryKind::Income, "Refund", Decimal::from(-10))
            .expect_err("negative amount must fail");
        assert!(matches!(err, FarmError::NegativeAmount(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn entry_overflowing_the_total_is_rejected() {
        let mut store = LedgerStore::new();
        store
            .add_entry(date(1), EntryKind::Income, "Bumper harvest", Decimal::MAX)
            .unwrap();
        let err = store
            .add_entry(date(2), EntryKind::Income, "Second harvest", Decimal::MAX)
            .expect_err("total would overflow");
        assert!(matches!(err, FarmError::AmountOverflow(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_income(), Decimal::MAX);

        store
            .add_entry(date(3), EntryKind::Expense, "Land purchase", Decimal::MAX)
            .unwrap();
        assert_eq!(store.net_balance(), Decimal::ZERO);
        assert_eq!(store.summary().expense, Decimal::MAX);
    }

    #[test]
    fn zero_amount_is_accepted() {
        let mut store = LedgerStore::new();
        store
            .add_entry(date(1), EntryKind::Expense, "Free seed sample", Decimal::ZERO)
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_expense(), Decimal::ZERO);
    }

    #[test]
    fn json_export_lists_entries() {
        let mut store = LedgerStore::new();
        store
            .add_entry(date(1), EntryKind::Income, "Crop sale", Decimal::from(5000))
            .unwrap();
        let json = store.to_json().unwrap();
        assert!(json.contains("\"Crop sale\""));
        assert!(json.contains("\"Income\""));
        assert!(json.contains("2024-01-01"));
    }
}
