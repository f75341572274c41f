//! Income and expense ledger kept for the lifetime of a session.

pub mod entry;
pub mod store;

pub use entry::{parse_amount, parse_date, EntryKind, LedgerEntry};
pub use store::{LedgerStore, LedgerSummary};
