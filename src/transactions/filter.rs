//! Client-side filtering for an already-fetched transaction list.
//!
//! Mirrors the grid controls: a month selector, a kind filter, an exact
//! date filter and a substring search over the description.

use chrono::{Datelike, NaiveDate};

use crate::transactions::{Transaction, TransactionKind};

/// Filter over a local transaction list; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Calendar month to keep, 1-12
    pub month: Option<u32>,

    /// Keep only this kind
    pub kind: Option<TransactionKind>,

    /// Keep only this exact date
    pub date: Option<NaiveDate>,

    /// Case-insensitive substring match on the description
    pub search: Option<String>,
}

impl TransactionFilter {
    /// Whether a transaction passes every set filter
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(month) = self.month {
            if transaction.date.month() != month {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(date) = self.date {
            if transaction.date != date {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let haystack = transaction.description.to_lowercase();
            if !haystack.contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Apply a filter to a transaction slice, preserving order
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}
