//! Authentication and user management for FinTrack

mod session;
mod types;

use std::sync::Arc;

use crate::error::Error;
use crate::gateway::ApiClient;

pub use session::*;
pub use types::{NewUser, User};

use types::{LoginResponse, SignInRequest, SignUpResponse};

/// Client for authentication and the users resource
pub struct AuthClient {
    gateway: Arc<ApiClient>,
}

impl AuthClient {
    /// Create a new AuthClient
    pub(crate) fn new(gateway: Arc<ApiClient>) -> Self {
        Self { gateway }
    }

    /// Sign in with email and password.
    ///
    /// On success the returned session is persisted to the session store
    /// (unless `persist_session` is disabled), making every subsequent
    /// request authenticated. A wrong password surfaces as
    /// [`Error::Api`] with the server's message.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let body = SignInRequest { email, password };

        let response: LoginResponse = self
            .gateway
            .post("/auth/login")
            .unauthenticated()
            .json(&body)?
            .execute()
            .await?;

        let user_id = response.data.user.as_ref().map(|u| u.id.clone());
        let session = Session::new(response.data.token, response.data.refresh_token, user_id);

        if self.gateway.options().persist_session {
            self.gateway.store().persist(&session).await?;
        }

        Ok(session)
    }

    /// Register a new user. Duplicate emails surface as a 409 [`Error::Api`].
    pub async fn sign_up(&self, new_user: &NewUser) -> Result<User, Error> {
        let response: SignUpResponse = self
            .gateway
            .post("/newUser")
            .unauthenticated()
            .json(new_user)?
            .execute()
            .await?;

        Ok(response.user)
    }

    /// Sign out by clearing the stored session. The backend has no logout
    /// endpoint; discarding the tokens is the whole operation.
    pub async fn sign_out(&self) -> Result<(), Error> {
        self.gateway.store().clear().await
    }

    /// Exchange the stored refresh token for a new access token and return
    /// the updated session
    pub async fn refresh_session(&self) -> Result<Session, Error> {
        let current = self
            .gateway
            .store()
            .load()
            .await?
            .ok_or(Error::SessionExpired)?;

        self.gateway
            .refresh_access_token(Some(&current.access_token))
            .await?;

        self.gateway
            .store()
            .load()
            .await?
            .ok_or(Error::SessionExpired)
    }

    /// Get the current session, if one is stored
    pub async fn current_session(&self) -> Result<Option<Session>, Error> {
        self.gateway.store().load().await
    }

    /// Id of the signed-in user, when the backend reported one at sign-in
    pub async fn current_user_id(&self) -> Result<Option<String>, Error> {
        Ok(self.current_session().await?.and_then(|s| s.user_id))
    }

    /// Replace the stored session
    pub async fn set_session(&self, session: &Session) -> Result<(), Error> {
        self.gateway.store().persist(session).await
    }

    /// List user accounts
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.gateway.get("/users").execute().await
    }
}
