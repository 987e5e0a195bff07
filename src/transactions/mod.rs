//! The transactions resource

mod filter;
mod query;
mod types;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::Error;
use crate::gateway::{ApiClient, Envelope};

pub use filter::*;
pub use query::*;
pub use types::*;

/// Client for the transactions resource
pub struct TransactionsClient {
    gateway: Arc<ApiClient>,
}

impl TransactionsClient {
    /// Create a new TransactionsClient
    pub(crate) fn new(gateway: Arc<ApiClient>) -> Self {
        Self { gateway }
    }

    /// List transactions with the given server-side filters
    pub async fn list(&self, query: &TransactionQuery) -> Result<TransactionPage, Error> {
        let mut request = self.gateway.get("/transactions");
        for (key, value) in query.params() {
            request = request.query(key, value);
        }

        let envelope: Envelope<TransactionPage> = request.execute().await?;
        Ok(envelope.data)
    }

    /// Create a transaction and return the stored record
    pub async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, Error> {
        let envelope: Envelope<Transaction> = self
            .gateway
            .post("/newTransactions")
            .json(new_transaction)?
            .execute()
            .await?;
        Ok(envelope.data)
    }

    /// Update fields of an existing transaction
    pub async fn update(&self, id: &str, update: &TransactionUpdate) -> Result<Transaction, Error> {
        let envelope: Envelope<UpdatedTransaction> = self
            .gateway
            .put(&format!("/transactions/{id}"))
            .json(update)?
            .execute()
            .await?;
        Ok(envelope.data.transaction)
    }

    /// Delete a transaction
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.gateway
            .delete(&format!("/transactions/{id}"))
            .execute_raw()
            .await?;
        Ok(())
    }

    /// Delete several transactions at once; returns the deleted count
    pub async fn bulk_delete(&self, ids: &[&str]) -> Result<u64, Error> {
        let body = serde_json::json!({ "transactionIds": ids });

        let envelope: Envelope<BulkDeleted> = self
            .gateway
            .delete("/transactions/bulk")
            .json(&body)?
            .execute()
            .await?;
        Ok(envelope.data.deleted_count)
    }

    /// Aggregated statistics for the given range. The stats shape is
    /// defined by the backend and returned as-is.
    pub async fn stats(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        period: Option<&str>,
    ) -> Result<serde_json::Value, Error> {
        let mut request = self.gateway.get("/transactions/stats");
        if let Some(start) = start {
            request = request.query("startDate", &start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = end {
            request = request.query("endDate", &end.format("%Y-%m-%d").to_string());
        }
        if let Some(period) = period {
            request = request.query("period", period);
        }

        let envelope: Envelope<StatsData> = request.execute().await?;
        Ok(envelope.data.stats)
    }
}
