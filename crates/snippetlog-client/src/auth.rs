//! Account operations: register, login, logout, profile.

use tracing::{debug, info, instrument, warn};

use snippetlog_core::{AccessToken, CredentialKey, Credentials, Result, UserProfile};

use crate::endpoints::{self, AuthResponse, LoginRequest, MeResponse, RefreshTokenRequest, RegisterRequest};
use crate::session::SessionState;
use crate::transport::{AuthedTransport, PendingRequest};

/// Auth endpoints bound to a session.
#[derive(Debug, Clone)]
pub struct AuthService {
    transport: AuthedTransport,
    session: SessionState,
}

impl AuthService {
    pub(crate) fn new(transport: AuthedTransport, session: SessionState) -> Self {
        Self { transport, session }
    }

    /// Create an account and log it in.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection (for example an email already in use)
    /// as a protocol error. The session is left untouched on failure.
    #[instrument(skip(self, credentials, name), fields(email = %credentials.email()))]
    pub async fn register(&self, credentials: &Credentials, name: Option<&str>) -> Result<UserProfile> {
        debug!("Registering account");
        let request = PendingRequest::post(endpoints::REGISTER)
            .json(&RegisterRequest {
                email: credentials.email(),
                password: credentials.password(),
                name,
            })?
            .without_refresh();

        let response: AuthResponse = self.transport.request_json(request).await?;
        self.session.login(&response.user, &response.tokens);
        info!("Account registered");

        Ok(response.user)
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Wrong credentials come back as a 401 protocol error carrying the
    /// server message. A stored access token is sent along, but no refresh
    /// is attempted for this call.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile> {
        debug!("Logging in");
        let request = PendingRequest::post(endpoints::LOGIN)
            .json(&LoginRequest {
                email: credentials.email(),
                password: credentials.password(),
            })?
            .without_refresh();

        let response: AuthResponse = self.transport.request_json(request).await?;
        self.session.login(&response.user, &response.tokens);

        Ok(response.user)
    }

    /// End the session.
    ///
    /// Revokes the refresh token server-side when one is stored. That call
    /// is best effort: its failure is logged and the local session is torn
    /// down regardless.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        if let Some(refresh_token) = self.transport.store().get(CredentialKey::RefreshToken) {
            let result = match PendingRequest::post(endpoints::LOGOUT).json(&RefreshTokenRequest {
                refresh_token: &refresh_token,
            }) {
                Ok(request) => self.transport.request_empty(request).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                warn!(error = %e, "Server-side logout failed, clearing local session anyway");
            }
        }

        self.session.logout();
    }

    /// Fetch the logged-in user's profile from the server.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<UserProfile> {
        let response: MeResponse = self
            .transport
            .request_json(PendingRequest::get(endpoints::ME))
            .await?;
        Ok(response.user)
    }

    /// Exchange the stored refresh token for a new access token now.
    ///
    /// Unlike the refresh triggered by a rejected request, failure here does
    /// not clear the session.
    pub async fn refresh(&self) -> Result<AccessToken> {
        self.transport.refresh().await
    }
}
