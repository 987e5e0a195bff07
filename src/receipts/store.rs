//! Local persistence for processed receipts.
//!
//! Receipts live only on this machine, as a JSON list on disk. Writes are
//! whole-list replacements, last write wins.

use std::path::PathBuf;

use crate::error::Error;
use crate::receipts::Receipt;

/// Sort orders for a receipt list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptSort {
    /// Merchant name, A to Z
    Merchant,
    /// Largest amount first
    Amount,
    /// Newest first
    Date,
}

/// File-backed receipt list
pub struct ReceiptStore {
    path: PathBuf,
}

impl ReceiptStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all stored receipts, newest first
    pub async fn list(&self) -> Result<Vec<Receipt>, Error> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Prepend a receipt and persist; returns the updated list
    pub async fn add(&self, receipt: Receipt) -> Result<Vec<Receipt>, Error> {
        let mut receipts = self.list().await?;
        receipts.insert(0, receipt);
        self.save(&receipts).await?;
        Ok(receipts)
    }

    /// Remove the receipt with the given preview key; returns the updated
    /// list
    pub async fn remove(&self, preview: &str) -> Result<Vec<Receipt>, Error> {
        let mut receipts = self.list().await?;
        receipts.retain(|r| r.preview != preview);
        self.save(&receipts).await?;
        Ok(receipts)
    }

    async fn save(&self, receipts: &[Receipt]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(receipts)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// Case-insensitive substring search over merchant names
pub fn search_receipts<'a>(receipts: &'a [Receipt], term: &str) -> Vec<&'a Receipt> {
    let needle = term.to_lowercase();
    receipts
        .iter()
        .filter(|r| r.merchant.to_lowercase().contains(&needle))
        .collect()
}

/// Sort a receipt list in place
pub fn sort_receipts(receipts: &mut [Receipt], sort: ReceiptSort) {
    match sort {
        ReceiptSort::Merchant => receipts.sort_by(|a, b| a.merchant.cmp(&b.merchant)),
        ReceiptSort::Amount => receipts.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        // dates are ISO-ordered strings, so lexicographic descending works
        ReceiptSort::Date => receipts.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}
