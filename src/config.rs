//! Configuration options for the FinTrack client

use std::time::Duration;

/// Configuration options for the FinTrack client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Whether a 401 response triggers an automatic token refresh and replay
    pub auto_refresh_token: bool,

    /// Whether signing in persists the session to the session store
    pub persist_session: bool,

    /// The request timeout applied to every outgoing call
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            auto_refresh_token: true,
            persist_session: true,
            request_timeout: Some(Duration::from_secs(10)),
        }
    }
}

impl ClientOptions {
    /// Set whether to automatically refresh the token on a 401
    pub fn with_auto_refresh_token(mut self, value: bool) -> Self {
        self.auto_refresh_token = value;
        self
    }

    /// Set whether to persist the session on sign-in
    pub fn with_persist_session(mut self, value: bool) -> Self {
        self.persist_session = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
