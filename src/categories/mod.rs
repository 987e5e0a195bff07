//! The categories resource

mod types;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::Error;
use crate::gateway::{ApiClient, Envelope};

pub use types::*;

/// Client for the categories resource
pub struct CategoriesClient {
    gateway: Arc<ApiClient>,
}

impl CategoriesClient {
    /// Create a new CategoriesClient
    pub(crate) fn new(gateway: Arc<ApiClient>) -> Self {
        Self { gateway }
    }

    /// List categories, optionally restricted to one kind
    pub async fn list(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>, Error> {
        let mut request = self.gateway.get("/categories");
        if let Some(kind) = kind {
            request = request.query("type", kind.as_str());
        }
        request.execute().await
    }

    /// Get a single category by id
    pub async fn get(&self, id: &str) -> Result<Category, Error> {
        let envelope: Envelope<Category> = self
            .gateway
            .get(&format!("/categories/{id}"))
            .execute()
            .await?;
        Ok(envelope.data)
    }

    /// Create a category and return the stored record
    pub async fn create(&self, new_category: &NewCategory) -> Result<Category, Error> {
        let response: CreatedCategory = self
            .gateway
            .post("/categories")
            .json(new_category)?
            .execute()
            .await?;
        Ok(response.category)
    }

    /// Update fields of an existing category
    pub async fn update(&self, id: &str, update: &CategoryUpdate) -> Result<(), Error> {
        self.gateway
            .put(&format!("/categories/{id}"))
            .json(update)?
            .execute_raw()
            .await?;
        Ok(())
    }

    /// Delete a category
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.gateway
            .delete(&format!("/categories/{id}"))
            .execute_raw()
            .await?;
        Ok(())
    }

    /// Archive a category (soft delete)
    pub async fn archive(&self, id: &str) -> Result<(), Error> {
        self.gateway
            .put(&format!("/categories/{id}/archive"))
            .execute_raw()
            .await?;
        Ok(())
    }

    /// Restore an archived category
    pub async fn restore(&self, id: &str) -> Result<(), Error> {
        self.gateway
            .put(&format!("/categories/{id}/restore"))
            .execute_raw()
            .await?;
        Ok(())
    }

    /// Delete several categories at once
    pub async fn bulk_delete(&self, ids: &[&str]) -> Result<(), Error> {
        let body = serde_json::json!({ "categoryIds": ids });
        self.gateway
            .delete("/categories/bulk")
            .json(&body)?
            .execute_raw()
            .await?;
        Ok(())
    }

    /// Usage statistics per category for the given range. The stats shape
    /// is defined by the backend and returned as-is.
    pub async fn stats(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<serde_json::Value, Error> {
        let mut request = self.gateway.get("/categories/stats");
        if let Some(start) = start {
            request = request.query("startDate", &start.format("%Y-%m-%d").to_string());
        }
        if let Some(end) = end {
            request = request.query("endDate", &end.format("%Y-%m-%d").to_string());
        }
        request.execute().await
    }

    /// List the built-in default categories
    pub async fn defaults(&self) -> Result<Vec<Category>, Error> {
        self.gateway.get("/categories/defaults").execute().await
    }

    /// Seed the account with the default categories
    pub async fn init_defaults(&self) -> Result<(), Error> {
        self.gateway
            .post("/categories/init-defaults")
            .execute_raw()
            .await?;
        Ok(())
    }
}

/// Filter over an already-fetched category list; mirrors the page's
/// kind selector and archived toggle
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    /// Keep only this kind
    pub kind: Option<CategoryKind>,

    /// When false, archived categories are dropped
    pub show_archived: bool,
}

/// Apply a filter to a category slice, preserving order
pub fn filter_categories<'a>(
    categories: &'a [Category],
    filter: &CategoryFilter,
) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|c| filter.kind.map_or(true, |kind| c.kind == kind))
        .filter(|c| filter.show_archived || c.is_active)
        .collect()
}
