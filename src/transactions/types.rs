//! Types for the transactions resource

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Wire representation, as the API expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    /// Capitalized form used in tables and exports
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A transaction as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in the account currency
    pub amount: f64,

    pub category: String,

    /// Transaction date. The backend serializes datetimes; only the date
    /// part is kept.
    #[serde(with = "wire_date")]
    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload for creating a transaction
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub amount: f64,

    pub category: String,

    #[serde(with = "wire_date")]
    pub date: NaiveDate,

    pub description: String,

    #[serde(rename = "paymentMethod")]
    pub payment_method: String,

    pub tags: Vec<String>,
}

impl NewTransaction {
    /// Create a payload with the required fields; the rest default to empty
    pub fn new(kind: TransactionKind, amount: f64, category: &str, date: NaiveDate) -> Self {
        Self {
            kind,
            amount,
            category: category.to_string(),
            date,
            description: String::new(),
            payment_method: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, payment_method: &str) -> Self {
        self.payment_method = payment_method.to_string();
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for an existing transaction; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(
        serialize_with = "wire_date::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "paymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// One page of transactions plus the backend's paging counters
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub pagination: Pagination,
}

/// Paging counters echoed back by the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub page: u32,

    pub limit: u32,

    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    #[serde(rename = "totalItems")]
    pub total_items: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdatedTransaction {
    pub transaction: Transaction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkDeleted {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsData {
    pub stats: serde_json::Value,
}

/// Date (de)serialization matching the wire format: dates go out as
/// `YYYY-MM-DD`, and both dates and ISO datetimes are accepted coming in.
pub(crate) mod wire_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn serialize_opt<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let value = String::deserialize(deserializer)?;
        let date_part = value.split('T').next().unwrap_or(&value);
        NaiveDate::parse_from_str(date_part, FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_plain_dates_and_datetimes() {
        let from_date: Transaction = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "type": "expense",
            "amount": 4.5,
            "category": "Food",
            "date": "2024-01-05",
        }))
        .unwrap();
        let from_datetime: Transaction = serde_json::from_value(serde_json::json!({
            "_id": "t2",
            "type": "income",
            "amount": 2000.0,
            "category": "Salary",
            "date": "2024-01-10T09:30:00",
        }))
        .unwrap();

        assert_eq!(from_date.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(
            from_datetime.date,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn new_transaction_serializes_wire_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let payload = NewTransaction::new(TransactionKind::Expense, 12.0, "Travel", date)
            .with_payment_method("Card")
            .with_tags(["work"]);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["paymentMethod"], "Card");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["tags"][0], "work");
    }

    #[test]
    fn update_skips_unset_fields() {
        let update = TransactionUpdate {
            amount: Some(20.0),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["amount"], 20.0);
    }
}
