//! Types for the receipt OCR flow

use serde::{Deserialize, Deserializer, Serialize};

use crate::transactions::TransactionKind;

/// Fields the OCR service extracted from an uploaded receipt. Extraction
/// is best-effort; any field may come back empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedReceipt {
    #[serde(rename = "extractedMerchant", default)]
    pub merchant: Option<String>,

    /// Extracted date, in whatever format the OCR engine recognized
    #[serde(rename = "extractedDate", default)]
    pub date: Option<String>,

    #[serde(rename = "extractedAmount", default, deserialize_with = "flexible_amount")]
    pub amount: Option<f64>,
}

/// The OCR engine reports amounts as numbers or numeric strings,
/// depending on how the value was recognized.
fn flexible_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
    })
}

/// A processed receipt as kept in the local receipt store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub merchant: String,

    /// Receipt date as extracted or entered; not normalized
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub amount: f64,

    /// Local preview key for the uploaded image; also identifies the
    /// receipt within the store
    pub preview: String,

    #[serde(default)]
    pub category: String,

    #[serde(rename = "type", default = "default_kind")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_kind() -> TransactionKind {
    TransactionKind::Expense
}

impl Receipt {
    /// Build a receipt from the OCR service's extraction, keyed by the
    /// local preview reference
    pub fn from_extracted(extracted: ExtractedReceipt, preview: &str) -> Self {
        Self {
            merchant: extracted.merchant.unwrap_or_default(),
            date: extracted.date.unwrap_or_default(),
            amount: extracted.amount.unwrap_or(0.0),
            preview: preview.to_string(),
            category: String::new(),
            kind: TransactionKind::Expense,
            description: String::new(),
            payment_method: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Set the kind
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Upload limits and formats the OCR service accepts
#[derive(Debug, Clone, Deserialize)]
pub struct SupportedFormats {
    #[serde(rename = "supportedFormats")]
    pub supported_formats: Vec<String>,

    /// Maximum upload size in bytes
    #[serde(rename = "maxFileSize")]
    pub max_file_size: u64,

    #[serde(rename = "maxFileSizeMB")]
    pub max_file_size_mb: f64,

    #[serde(default)]
    pub features: Vec<String>,
}

/// Health report from the OCR service
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}
