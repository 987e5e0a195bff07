//! Receipt upload and OCR extraction.
//!
//! Receipts are uploaded to the external OCR service, which extracts the
//! merchant, date and amount. Confirmed receipts are posted back to the
//! API as transactions and remembered locally in a [`ReceiptStore`].

mod store;
mod types;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use reqwest::Method;

use crate::error::Error;
use crate::gateway::{ApiClient, Envelope};
use crate::transactions::{NewTransaction, Transaction, TransactionsClient};

pub use store::*;
pub use types::*;

/// Client for the receipt OCR service
pub struct ReceiptsClient {
    gateway: Arc<ApiClient>,
}

impl ReceiptsClient {
    /// Create a new ReceiptsClient
    pub(crate) fn new(gateway: Arc<ApiClient>) -> Self {
        Self { gateway }
    }

    /// Upload a receipt image or PDF and return the extracted fields
    pub async fn process(&self, file_name: &str, bytes: Vec<u8>) -> Result<ExtractedReceipt, Error> {
        let envelope: Envelope<ExtractedReceipt> = self
            .gateway
            .ocr_request(Method::POST, "/process-receipt")
            .file("file", file_name, bytes)
            .execute()
            .await?;
        Ok(envelope.data)
    }

    /// Extract financial fields from plain text instead of a file
    pub async fn process_text(&self, text: &str) -> Result<ExtractedReceipt, Error> {
        let body = serde_json::json!({ "text": text });

        let envelope: Envelope<ExtractedReceipt> = self
            .gateway
            .ocr_request(Method::POST, "/process-text")
            .json(&body)?
            .execute()
            .await?;
        Ok(envelope.data)
    }

    /// Formats and size limits the OCR service accepts
    pub async fn supported_formats(&self) -> Result<SupportedFormats, Error> {
        let envelope: Envelope<SupportedFormats> = self
            .gateway
            .ocr_request(Method::GET, "/supported-formats")
            .execute()
            .await?;
        Ok(envelope.data)
    }

    /// Health check of the OCR service
    pub async fn health(&self) -> Result<ServiceHealth, Error> {
        self.gateway
            .ocr_request(Method::GET, "/health")
            .execute()
            .await
    }

    /// Record a confirmed receipt as a transaction.
    ///
    /// Empty fields fall back the way the upload flow does: kind defaults
    /// to expense in the receipt itself, the category to "Uncategorized"
    /// and the date to today.
    pub async fn save_as_transaction(&self, receipt: &Receipt) -> Result<Transaction, Error> {
        let category = if receipt.category.is_empty() {
            "Uncategorized"
        } else {
            receipt.category.as_str()
        };

        let new_transaction =
            NewTransaction::new(receipt.kind, receipt.amount, category, receipt_date(&receipt.date))
                .with_description(&receipt.description)
                .with_payment_method(&receipt.payment_method)
                .with_tags(receipt.tags.clone());

        TransactionsClient::new(self.gateway.clone())
            .create(&new_transaction)
            .await
    }
}

/// Parse the date the OCR service extracted, falling back to today when
/// it is missing or unrecognizable
fn receipt_date(raw: &str) -> NaiveDate {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .unwrap_or_else(|_| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_date_parses_dates_and_datetimes() {
        assert_eq!(
            receipt_date("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(
            receipt_date("2024-01-05T13:30"),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn unparseable_receipt_date_falls_back_to_today() {
        assert_eq!(receipt_date("last tuesday"), Local::now().date_naive());
        assert_eq!(receipt_date(""), Local::now().date_naive());
    }
}
