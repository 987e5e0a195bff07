//! Session object and the stores that hold it between requests

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Credentials for an authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// The access token sent as `Authorization: Bearer <token>`
    #[serde(rename = "token")]
    pub access_token: String,

    /// The refresh token exchanged for a new access token on expiry
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,

    /// The id of the signed-in user, when the backend returned one
    #[serde(rename = "user_id", skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
}

impl Session {
    /// Create a new session
    pub fn new(access_token: String, refresh_token: String, user_id: Option<String>) -> Self {
        Self {
            access_token,
            refresh_token,
            user_id,
        }
    }
}

/// Where the current session lives between requests.
///
/// The gateway reads the session fresh from the store at send time and
/// writes back through it after a refresh, so every consumer observes the
/// same credentials.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the current session, if one is stored
    async fn load(&self) -> Result<Option<Session>, Error>;

    /// Persist a session, replacing any stored one
    async fn persist(&self, session: &Session) -> Result<(), Error>;

    /// Remove the stored session
    async fn clear(&self) -> Result<(), Error>;
}

/// In-memory session store, dropped with the client
#[derive(Default)]
pub struct MemoryStore {
    session: RwLock<Option<Session>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self) -> Result<Option<Session>, Error> {
        Ok(self.session.read().unwrap().clone())
    }

    async fn persist(&self, session: &Session) -> Result<(), Error> {
        *self.session.write().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        *self.session.write().unwrap() = None;
        Ok(())
    }
}

/// File-backed session store.
///
/// Serializes the session as a JSON object with `token`, `refreshToken` and
/// `user_id` keys. Writes are last-write-wins; there is no cross-process
/// locking.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileStore {
    async fn load(&self) -> Result<Option<Session>, Error> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let session: Session = serde_json::from_slice(&bytes)?;
        if session.access_token.is_empty() && session.refresh_token.is_empty() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn persist(&self, session: &Session) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
