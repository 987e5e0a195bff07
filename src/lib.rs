//! FinTrack Rust Client Library
//!
//! A Rust client library for the FinTrack personal finance backend,
//! providing authenticated access to transactions, categories and the
//! receipt OCR service, plus local dashboard aggregation and
//! spreadsheet/PDF export of transaction lists.
//!
//! All HTTP traffic flows through one configured gateway: the bearer
//! token is attached from the session store at send time, and a 401
//! answer triggers a single shared token refresh followed by one replay
//! of the failed request.

pub mod auth;
pub mod categories;
pub mod config;
pub mod error;
pub mod export;
pub mod gateway;
pub mod insights;
pub mod receipts;
pub mod transactions;

use std::sync::Arc;

use crate::auth::{AuthClient, MemoryStore, SessionStore};
use crate::categories::CategoriesClient;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::gateway::ApiClient;
use crate::receipts::ReceiptsClient;
use crate::transactions::TransactionsClient;

/// Default API base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default OCR service base URL for local development
pub const DEFAULT_OCR_URL: &str = "http://localhost:5001";

/// The main entry point for the FinTrack Rust client
pub struct FinTrack {
    /// Shared gateway carrying the base URLs, HTTP client and session
    gateway: Arc<ApiClient>,
}

impl FinTrack {
    /// Create a new FinTrack client with an in-memory session and default
    /// options
    ///
    /// # Arguments
    ///
    /// * `api_url` - Base URL of the FinTrack API, including the `/api` prefix
    /// * `ocr_url` - Base URL of the receipt OCR service
    ///
    /// # Example
    ///
    /// ```
    /// use fintrack_client::FinTrack;
    ///
    /// let client = FinTrack::new("http://localhost:5000/api", "http://localhost:5001").unwrap();
    /// ```
    pub fn new(api_url: &str, ocr_url: &str) -> Result<Self, Error> {
        Self::new_with_options(
            api_url,
            ocr_url,
            Arc::new(MemoryStore::new()),
            ClientOptions::default(),
        )
    }

    /// Create a new FinTrack client with a custom session store and options
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use fintrack_client::auth::FileStore;
    /// use fintrack_client::config::ClientOptions;
    /// use fintrack_client::FinTrack;
    ///
    /// let store = Arc::new(FileStore::new("/tmp/fintrack-session.json"));
    /// let options = ClientOptions::default().with_auto_refresh_token(true);
    /// let client = FinTrack::new_with_options(
    ///     "http://localhost:5000/api",
    ///     "http://localhost:5001",
    ///     store,
    ///     options,
    /// )
    /// .unwrap();
    /// ```
    pub fn new_with_options(
        api_url: &str,
        ocr_url: &str,
        store: Arc<dyn SessionStore>,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        let gateway = ApiClient::new(api_url, ocr_url, store, options)?;
        Ok(Self {
            gateway: Arc::new(gateway),
        })
    }

    /// Create a client from the `FINTRACK_API_URL` and `FINTRACK_OCR_URL`
    /// environment variables, falling back to the local development URLs
    pub fn from_env() -> Result<Self, Error> {
        let api_url =
            std::env::var("FINTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let ocr_url =
            std::env::var("FINTRACK_OCR_URL").unwrap_or_else(|_| DEFAULT_OCR_URL.to_string());
        Self::new(&api_url, &ocr_url)
    }

    /// The shared gateway, for raw requests against either service
    pub fn gateway(&self) -> &ApiClient {
        &self.gateway
    }

    /// Client for authentication and user management
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.gateway.clone())
    }

    /// Client for the transactions resource
    pub fn transactions(&self) -> TransactionsClient {
        TransactionsClient::new(self.gateway.clone())
    }

    /// Client for the categories resource
    pub fn categories(&self) -> CategoriesClient {
        CategoriesClient::new(self.gateway.clone())
    }

    /// Client for the receipt OCR service
    pub fn receipts(&self) -> ReceiptsClient {
        ReceiptsClient::new(self.gateway.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::FinTrack;
}
