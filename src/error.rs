//! Error handling for the FinTrack Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the FinTrack Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Filesystem errors from the local stores and exporters
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-success response from the API, carrying the server's message
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the failed response
        status: u16,
        /// Message extracted from the error payload, or a generic fallback
        message: String,
    },

    /// The session could not be refreshed; stored credentials were cleared
    /// and the user must sign in again
    #[error("session expired, sign in required")]
    SessionExpired,

    /// Local store errors (session file, receipt list)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Workbook or PDF export errors
    #[error("Export error: {0}")]
    Export(String),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new API error from a status code and message
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new storage error
    pub fn storage<T: fmt::Display>(msg: T) -> Self {
        Error::Storage(msg.to_string())
    }

    /// Create a new export error
    pub fn export<T: fmt::Display>(msg: T) -> Self {
        Error::Export(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// HTTP status of the error, if it came from an API response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
