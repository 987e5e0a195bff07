//! Query builder for the transaction list endpoint

use chrono::NaiveDate;

use crate::transactions::TransactionKind;

/// Sort direction for the list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Builder for the server-side filters of `GET /transactions`.
///
/// Unset filters are simply not sent; the backend then applies its
/// defaults (page 1, 10 items, newest first).
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    params: Vec<(String, String)>,
}

impl TransactionQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    fn add(mut self, key: &str, value: String) -> Self {
        self.params.push((key.to_string(), value));
        self
    }

    /// Only transactions of the given kind
    pub fn kind(self, kind: TransactionKind) -> Self {
        self.add("type", kind.as_str().to_string())
    }

    /// Only transactions in the given category
    pub fn category(self, category: &str) -> Self {
        self.add("category", category.to_string())
    }

    /// Only transactions dated within the inclusive range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.add("startDate", start.format("%Y-%m-%d").to_string())
            .add("endDate", end.format("%Y-%m-%d").to_string())
    }

    /// Lower bound on the amount
    pub fn min_amount(self, amount: f64) -> Self {
        self.add("minAmount", amount.to_string())
    }

    /// Upper bound on the amount
    pub fn max_amount(self, amount: f64) -> Self {
        self.add("maxAmount", amount.to_string())
    }

    /// Only transactions paid with the given method
    pub fn payment_method(self, method: &str) -> Self {
        self.add("paymentMethod", method.to_string())
    }

    /// Only transactions carrying at least one of the tags
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = tags
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .join(",");
        self.add("tags", joined)
    }

    /// Case-insensitive substring match on the description
    pub fn search(self, needle: &str) -> Self {
        self.add("search", needle.to_string())
    }

    /// Page number, starting at 1
    pub fn page(self, page: u32) -> Self {
        self.add("page", page.to_string())
    }

    /// Page size
    pub fn limit(self, limit: u32) -> Self {
        self.add("limit", limit.to_string())
    }

    /// Field to sort by (the backend defaults to `date`)
    pub fn sort_by(self, field: &str) -> Self {
        self.add("sortBy", field.to_string())
    }

    /// Sort direction (the backend defaults to descending)
    pub fn sort_order(self, order: SortOrder) -> Self {
        self.add("sortOrder", order.as_str().to_string())
    }

    pub(crate) fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
