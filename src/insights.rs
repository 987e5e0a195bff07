//! Dashboard aggregation over a fetched transaction list.
//!
//! These are pure functions; the dashboard fetches once and derives its
//! stat cards and charts locally.

use crate::transactions::{Transaction, TransactionKind};

/// Fixed palette the category chart cycles through
pub const CHART_PALETTE: [&str; 6] = [
    "#d32f2f", "#1976d2", "#9c27b0", "#ed6c02", "#0288d1", "#2e7d32",
];

const INCOME_BAR_COLOR: &str = "rgba(75, 206, 81, 0.9)";
const EXPENSE_BAR_COLOR: &str = "rgba(218, 45, 68, 0.85)";

/// Aggregate figures for the stat cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of income amounts
    pub income: f64,

    /// Sum of absolute expense amounts
    pub expenses: f64,

    /// Income minus expenses
    pub net: f64,

    /// Net as a percentage of income; 0 when there is no income
    pub savings_rate: f64,
}

/// Compute the stat-card totals for a transaction list
pub fn totals(transactions: &[Transaction]) -> Totals {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount.abs())
        .sum();

    let net = income - expenses;
    let savings_rate = if income > 0.0 { net / income * 100.0 } else { 0.0 };

    Totals {
        income,
        expenses,
        net,
        savings_rate,
    }
}

/// Sum of absolute expense amounts per category, in first-seen order
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = Vec::new();
    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        accumulate(&mut entries, &transaction.category, transaction.amount.abs());
    }
    entries
}

/// Sum of absolute amounts per kind and category, labeled
/// `"INCOME - <category>"` / `"EXPENSE - <category>"`, in first-seen order
pub fn breakdown_by_kind(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = Vec::new();
    for transaction in transactions {
        let category = if transaction.category.is_empty() {
            "Uncategorized"
        } else {
            &transaction.category
        };
        let label = format!(
            "{} - {}",
            transaction.kind.as_str().to_uppercase(),
            category
        );
        accumulate(&mut entries, &label, transaction.amount.abs());
    }
    entries
}

fn accumulate(entries: &mut Vec<(String, f64)>, key: &str, amount: f64) {
    match entries.iter_mut().find(|(k, _)| k == key) {
        Some((_, sum)) => *sum += amount,
        None => entries.push((key.to_string(), amount)),
    }
}

/// The `n` most recent transactions, newest first
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

/// Palette colors for `count` slices, cycling through [`CHART_PALETTE`]
pub fn chart_colors(count: usize) -> Vec<&'static str> {
    (0..count).map(|i| CHART_PALETTE[i % 6]).collect()
}

/// Labels, values and slice colors ready to hand to a chart renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

/// Doughnut data: expenses grouped by category
pub fn expense_chart(transactions: &[Transaction]) -> ChartData {
    let entries = expenses_by_category(transactions);
    let colors = chart_colors(entries.len());
    let (labels, values) = entries.into_iter().unzip();

    ChartData {
        labels,
        values,
        colors,
    }
}

/// Bar data: income and expenses per category, expense bars red and
/// income bars green
pub fn breakdown_chart(transactions: &[Transaction]) -> ChartData {
    let entries = breakdown_by_kind(transactions);
    let colors = entries
        .iter()
        .map(|(label, _)| {
            if label.starts_with("EXPENSE") {
                EXPENSE_BAR_COLOR
            } else {
                INCOME_BAR_COLOR
            }
        })
        .collect();
    let (labels, values) = entries.into_iter().unzip();

    ChartData {
        labels,
        values,
        colors,
    }
}
