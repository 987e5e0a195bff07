//! The configured HTTP gateway every outbound API call routes through.
//!
//! The gateway owns the base URLs, the shared `reqwest` client with its
//! request timeout, and the session store. Requests read the access token
//! fresh from the store at send time; a 401 response triggers a single
//! refresh of the access token followed by exactly one replay of the
//! original request. Concurrent 401s share one in-flight refresh.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::HeaderMap;
use reqwest::{multipart, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::auth::SessionStore;
use crate::config::ClientOptions;
use crate::error::Error;

/// Shared gateway for the FinTrack API and the OCR service
pub struct ApiClient {
    /// Base URL of the FinTrack API, e.g. `http://localhost:5000/api`
    base_url: String,

    /// Base URL of the receipt OCR service
    ocr_url: String,

    /// HTTP client used for requests
    http: Client,

    /// Where the current session lives
    store: Arc<dyn SessionStore>,

    /// Serializes token refreshes so concurrent 401s trigger only one
    refresh_gate: Mutex<()>,

    /// Client options
    options: ClientOptions,
}

impl ApiClient {
    /// Create a new gateway
    pub(crate) fn new(
        base_url: &str,
        ocr_url: &str,
        store: Arc<dyn SessionStore>,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        url::Url::parse(base_url)?;
        url::Url::parse(ocr_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ocr_url: ocr_url.trim_end_matches('/').to_string(),
            http,
            store,
            refresh_gate: Mutex::new(()),
            options,
        })
    }

    /// The base URL of the FinTrack API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store shared by every client
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub(crate) fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Start a request against the FinTrack API
    pub fn request(&self, method: Method, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, method, format!("{}{}", self.base_url, path))
    }

    /// Create a GET request against the API
    pub fn get(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    /// Create a POST request against the API
    pub fn post(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    /// Create a PUT request against the API
    pub fn put(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    /// Create a DELETE request against the API
    pub fn delete(&self, path: &str) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }

    /// Start a request against the OCR service. The OCR service does not
    /// share the API's auth scheme, so these go out unauthenticated.
    pub fn ocr_request(&self, method: Method, path: &str) -> ApiRequest<'_> {
        ApiRequest::new(self, method, format!("{}{}", self.ocr_url, path)).unauthenticated()
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// `stale` is the access token the caller just saw rejected. Callers
    /// serialize on the refresh gate; whoever enters first performs the
    /// exchange, and later callers find the stored token already changed
    /// and reuse it without a second refresh call. If no session or
    /// refresh token is stored, or the exchange fails, the store is
    /// cleared and [`Error::SessionExpired`] is returned.
    pub(crate) async fn refresh_access_token(&self, stale: Option<&str>) -> Result<String, Error> {
        let _gate = self.refresh_gate.lock().await;

        let Some(mut session) = self.store.load().await? else {
            return Err(Error::SessionExpired);
        };

        // another caller refreshed while we waited on the gate
        if stale != Some(session.access_token.as_str()) && !session.access_token.is_empty() {
            return Ok(session.access_token);
        }

        if session.refresh_token.is_empty() {
            self.store.clear().await.ok();
            return Err(Error::SessionExpired);
        }

        match self.exchange_refresh_token(&session.refresh_token).await {
            Ok(token) => {
                session.access_token = token.clone();
                self.store.persist(&session).await?;
                debug!("access token refreshed");
                Ok(token)
            }
            Err(err) => {
                warn!("token refresh failed: {err}");
                self.store.clear().await.ok();
                Err(Error::SessionExpired)
            }
        }
    }

    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<String, Error> {
        let url = format!("{}/auth/refresh-token", self.base_url);
        let body = RefreshRequest { refresh_token };

        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Error::auth(format!(
                "refresh rejected with status {}",
                response.status().as_u16()
            )));
        }

        let payload: RefreshResponse = response.json().await?;
        Ok(payload.data.token)
    }
}

/// The `{success, message, data}` envelope the API wraps payloads in.
/// Only `data` carries information the client keeps.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    #[serde(rename = "refreshToken")]
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    data: RefreshData,
}

#[derive(Deserialize)]
struct RefreshData {
    token: String,
}

struct FilePart {
    field: String,
    file_name: String,
    bytes: Vec<u8>,
}

/// Builder for a single request through the gateway.
///
/// The request body is held as bytes so the gateway can replay the request
/// after a token refresh.
pub struct ApiRequest<'a> {
    gateway: &'a ApiClient,
    method: Method,
    url: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    file: Option<FilePart>,
    authenticate: bool,
}

impl<'a> ApiRequest<'a> {
    fn new(gateway: &'a ApiClient, method: Method, url: String) -> Self {
        Self {
            gateway,
            method,
            url,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            file: None,
            authenticate: true,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = value.parse() {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add a query parameter to the request
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Attach a file as a multipart form body
    pub fn file(mut self, field: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        self.file = Some(FilePart {
            field: field.to_string(),
            file_name: file_name.to_string(),
            bytes,
        });
        self
    }

    /// Send without a bearer token and without the refresh-and-replay path
    pub fn unauthenticated(mut self) -> Self {
        self.authenticate = false;
        self
    }

    async fn send_once(&self, token: Option<&str>, user_id: Option<&str>) -> Result<Response, Error> {
        let mut req = self.gateway.http.request(self.method.clone(), &self.url);

        if !self.query.is_empty() {
            req = req.query(&self.query);
        }
        req = req.headers(self.headers.clone());

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(user_id) = user_id {
            req = req.header("user_id", user_id);
        }

        if let Some(body) = &self.body {
            req = req
                .header("Content-Type", "application/json")
                .body(body.clone());
        }
        if let Some(file) = &self.file {
            let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            req = req.multipart(multipart::Form::new().part(file.field.clone(), part));
        }

        Ok(req.send().await?)
    }

    /// Send the request, refreshing and replaying once on a 401.
    ///
    /// The access token is read fresh from the session store at send time;
    /// with no stored session the request goes out unauthenticated. On a
    /// 401 the stored refresh token is exchanged for a new access token
    /// and the request is replayed exactly once. Every other failure
    /// status propagates as [`Error::Api`] with the server's message.
    async fn dispatch(&self) -> Result<Response, Error> {
        let session = if self.authenticate {
            self.gateway.store.load().await?
        } else {
            None
        };
        let token = session.as_ref().map(|s| s.access_token.clone());
        let user_id = session.as_ref().and_then(|s| s.user_id.clone());

        let response = self.send_once(token.as_deref(), user_id.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED
            || !self.authenticate
            || !self.gateway.options.auto_refresh_token
        {
            return error_for_payload(response).await;
        }

        debug!("401 from {} {}, refreshing access token", self.method, self.url);
        let fresh = self.gateway.refresh_access_token(token.as_deref()).await?;
        let replay = self.send_once(Some(&fresh), user_id.as_deref()).await?;
        error_for_payload(replay).await
    }

    /// Execute the request and parse the response as JSON
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, Error> {
        let response = self.dispatch().await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute the request and return the raw successful response
    pub async fn execute_raw(self) -> Result<Response, Error> {
        self.dispatch().await
    }
}

/// Turn a non-success response into [`Error::Api`], extracting the server's
/// `message` (or `error`) field when the payload is JSON.
async fn error_for_payload(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| value.get("error").and_then(|m| m.as_str()))
            .map(str::to_string)
            .unwrap_or(text),
        Err(_) => text,
    };
    let message = if message.is_empty() {
        format!("request failed with status {}", status.as_u16())
    } else {
        message
    };

    Err(Error::api(status.as_u16(), message))
}
