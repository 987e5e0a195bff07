//! Workbook and PDF export of a transaction list

mod pdf;
mod xlsx;

pub use pdf::*;
pub use xlsx::*;

use chrono::{Datelike, NaiveDate};

use crate::transactions::TransactionKind;

/// Format a date the way the exports display it, e.g. `"Jan 5th"`
pub fn day_with_ordinal(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{} {}{}", date.format("%b"), day, suffix)
}

/// Format an amount with its ledger sign, e.g. `"-$4.50"` / `"+$2000.00"`
pub fn signed_amount(kind: TransactionKind, amount: f64) -> String {
    let sign = match kind {
        TransactionKind::Expense => '-',
        TransactionKind::Income => '+',
    };
    format!("{}${:.2}", sign, amount.abs())
}
