//! Authenticated HTTP transport with transparent token refresh.

use std::fmt;
use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, trace, warn};

use snippetlog_core::error::{AuthError, InvalidInputError, ProtocolError, TransportError};
use snippetlog_core::{AccessToken, CredentialKey, CredentialStore, Error, RefreshToken, Result};

use crate::config::ClientConfig;
use crate::endpoints::{self, ErrorResponse, RefreshResponse, RefreshTokenRequest};
use crate::events::{EVENT_CAPACITY, InvalidationReason, SessionEvent};

/// An outbound API call plus its one-shot "already retried" marker.
#[derive(Clone)]
pub struct PendingRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    authorization: Option<AccessToken>,
    refresh_on_unauthorized: bool,
    retried: bool,
}

impl PendingRequest {
    /// Create a request for `path`, relative to the API base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            authorization: None,
            refresh_on_unauthorized: true,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Other {
            message: e.to_string(),
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Hand a 401 straight back to the caller instead of refreshing.
    /// Used by login and register, where a 401 means wrong credentials
    /// rather than an expired token. The stored bearer is still attached.
    pub fn without_refresh(mut self) -> Self {
        self.refresh_on_unauthorized = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true once the request has been re-issued after a refresh.
    pub fn is_retried(&self) -> bool {
        self.retried
    }
}

// Bodies may carry passwords and headers carry tokens.
impl fmt::Debug for PendingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("has_body", &self.body.is_some())
            .field("refresh_on_unauthorized", &self.refresh_on_unauthorized)
            .field("retried", &self.retried)
            .finish()
    }
}

/// HTTP transport that attaches bearer credentials and recovers from an
/// expired access token.
///
/// Outbound, the stored access token (if any) is sent as
/// `Authorization: Bearer <token>`. When the API answers 401 the transport
/// refreshes the access token with the stored refresh token and re-issues
/// the request exactly once. If the refresh is impossible or fails, the
/// credential store is cleared, [`SessionEvent::Invalidated`] is published
/// and the caller receives the original 401.
///
/// Cheap to clone; clones share the connection pool, the store and the
/// event channel.
#[derive(Clone)]
pub struct AuthedTransport {
    inner: Arc<TransportInner>,
}

struct TransportInner {
    client: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn CredentialStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl AuthedTransport {
    /// Create a transport over `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Http {
                message: e.to_string(),
            })?;

        if !config.base_url.is_secure() && !config.base_url.is_loopback() {
            warn!(base_url = %config.base_url, "API base URL is plain HTTP; tokens travel unencrypted");
        }

        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            inner: Arc::new(TransportInner {
                client,
                config,
                store,
                events,
            }),
        })
    }

    /// Returns the configuration this transport was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns the credential store the transport reads and writes.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.inner.store
    }

    /// Subscribe to session lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Send a request through the credential and refresh hooks.
    ///
    /// Non-401 responses are returned unchanged, whatever their status.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the request could not be completed,
    /// and the 401 as [`Error::Protocol`] when it could not be recovered.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, mut request: PendingRequest) -> Result<Response> {
        request.authorization = self
            .inner
            .store
            .get(CredentialKey::AccessToken)
            .map(AccessToken::new);

        loop {
            let response = self.dispatch(&request).await?;

            if response.status() != StatusCode::UNAUTHORIZED || !request.refresh_on_unauthorized {
                return Ok(response);
            }

            let unauthorized = protocol_error(response).await;

            if request.retried {
                debug!("Retried request rejected again");
                return Err(unauthorized.into());
            }
            request.retried = true;

            info!("Access token rejected, attempting refresh");
            match self.refresh().await {
                Ok(token) => request.authorization = Some(token),
                Err(e) => {
                    warn!(error = %e, "Token refresh failed");
                    self.invalidate(InvalidationReason::from(&e));
                    return Err(unauthorized.into());
                }
            }
        }
    }

    /// Send a request and decode a JSON success body.
    pub async fn request_json<R: DeserializeOwned>(&self, request: PendingRequest) -> Result<R> {
        let response = self.send(request).await?;
        read_json(response).await
    }

    /// Send a request whose success body is ignored.
    pub async fn request_empty(&self, request: PendingRequest) -> Result<()> {
        let response = self.send(request).await?;
        check_status(response).await.map(|_| ())
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// The refresh call never carries the (possibly stale) access token.
    /// On success the new token is persisted and [`SessionEvent::Refreshed`]
    /// is published. Failure leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RefreshTokenMissing`] when no refresh token is
    /// stored, or the error of the refresh call.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<AccessToken> {
        let refresh_token = self
            .inner
            .store
            .get(CredentialKey::RefreshToken)
            .map(RefreshToken::new)
            .ok_or(AuthError::RefreshTokenMissing)?;

        info!("Refreshing access token");

        let url = self.inner.config.base_url.endpoint(endpoints::REFRESH);
        let response = self
            .inner
            .client
            .post(&url)
            .json(&RefreshTokenRequest {
                refresh_token: refresh_token.as_str(),
            })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let body: RefreshResponse = read_json(response).await?;
        let token = AccessToken::new(body.access_token);
        self.inner
            .store
            .set(CredentialKey::AccessToken, token.as_str());

        info!("Access token refreshed");
        let _ = self.inner.events.send(SessionEvent::Refreshed);

        Ok(token)
    }

    /// Clear every stored credential and tell subscribers the session is gone.
    fn invalidate(&self, reason: InvalidationReason) {
        warn!(%reason, "Session invalidated, clearing stored credentials");
        self.inner.store.clear();
        // Sending only fails when nobody is subscribed.
        let _ = self.inner.events.send(SessionEvent::Invalidated { reason });
    }

    async fn dispatch(&self, request: &PendingRequest) -> Result<Response> {
        let url = self.inner.config.base_url.endpoint(&request.path);
        debug!(%url, retried = request.is_retried(), "Sending request");

        let mut builder = self.inner.client.request(request.method.clone(), &url);
        if let Some(token) = &request.authorization {
            builder = builder.header(AUTHORIZATION, token.bearer());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        trace!(status = %response.status(), "Response received");

        Ok(response)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        let err = if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.inner.config.timeout.as_millis() as u64,
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        err.into()
    }
}

impl fmt::Debug for AuthedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthedTransport")
            .field("base_url", &self.inner.config.base_url)
            .field("timeout", &self.inner.config.timeout)
            .finish()
    }
}

/// Turn a non-success response into an error, passing success through.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(protocol_error(response).await.into())
    }
}

/// Decode a JSON success body.
async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R> {
    let response = check_status(response).await?;
    let text = response.text().await.map_err(|e| TransportError::Http {
        message: e.to_string(),
    })?;

    serde_json::from_str(&text).map_err(|e| {
        InvalidInputError::MalformedResponse {
            message: e.to_string(),
        }
        .into()
    })
}

/// Build a protocol error from a response, reading the server message if
/// the body carries one.
async fn protocol_error(response: Response) -> ProtocolError {
    let status = response.status().as_u16();
    let body = response.json::<ErrorResponse>().await.unwrap_or_default();
    ProtocolError::new(status, body.error, body.message)
}
