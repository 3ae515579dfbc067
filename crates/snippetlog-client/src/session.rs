//! In-memory view of who is logged in.

use std::sync::{Arc, Once, RwLock};

use tracing::{debug, info, instrument};

use snippetlog_core::{AuthTokens, CredentialKey, CredentialStore, UserProfile};

use crate::events::SessionEvent;

/// The logged-in user as far as the client knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub email: String,
}

/// Session state derived from the credential store.
///
/// Starts out loading. [`SessionState::hydrate`] reads the store once,
/// synchronously, and ends the loading phase whatever it finds. After that
/// [`login`](SessionState::login) and [`logout`](SessionState::logout) keep
/// the store and the in-memory user in step, and
/// [`apply`](SessionState::apply) follows teardowns triggered by the
/// transport.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: Arc<dyn CredentialStore>,
    current: RwLock<Option<CurrentUser>>,
    hydrated: Once,
}

impl SessionState {
    /// Create an unhydrated session over `store`.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                store,
                current: RwLock::new(None),
                hydrated: Once::new(),
            }),
        }
    }

    /// Restore the current user from the store on first activation.
    ///
    /// Later calls do nothing. No network call is made.
    pub fn hydrate(&self) {
        self.inner.hydrated.call_once(|| {
            let user = self.read_store();
            debug!(authenticated = user.is_some(), "Session hydrated from credential store");
            self.set_current(user);
        });
    }

    /// True until [`hydrate`](SessionState::hydrate) has completed.
    pub fn is_loading(&self) -> bool {
        !self.inner.hydrated.is_completed()
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.inner
            .current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Record a successful server login or registration.
    ///
    /// Persists both tokens and the email, then sets the current user.
    #[instrument(skip(self, profile, tokens), fields(email = %profile.email))]
    pub fn login(&self, profile: &UserProfile, tokens: &AuthTokens) {
        let store = &self.inner.store;
        store.set(CredentialKey::AccessToken, tokens.access_token.as_str());
        store.set(CredentialKey::RefreshToken, tokens.refresh_token.as_str());
        store.set(CredentialKey::UserEmail, &profile.email);

        self.set_current(Some(CurrentUser {
            email: profile.email.clone(),
        }));
        info!("Logged in");
    }

    /// Forget the session locally. Makes no network call.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        self.inner.store.clear();
        self.set_current(None);
        info!("Logged out");
    }

    /// Follow a session event published by the transport.
    ///
    /// The transport clears the store before publishing an invalidation,
    /// so the user is re-derived from the store. An invalidation that is
    /// applied after a newer login leaves that login in place.
    pub fn apply(&self, event: &SessionEvent) {
        if let SessionEvent::Invalidated { reason } = event {
            debug!(%reason, "Re-reading credential store after session invalidation");
            self.revalidate();
        }
    }

    /// Re-derive the current user from the store.
    ///
    /// Closes the window in which the transport has cleared the store but
    /// the in-memory user is still set.
    pub fn revalidate(&self) {
        let user = self.read_store();
        self.set_current(user);
    }

    fn read_store(&self) -> Option<CurrentUser> {
        let store = &self.inner.store;
        match (
            store.get(CredentialKey::AccessToken),
            store.get(CredentialKey::UserEmail),
        ) {
            (Some(_), Some(email)) => Some(CurrentUser { email }),
            _ => None,
        }
    }

    fn set_current(&self, user: Option<CurrentUser>) {
        *self
            .inner
            .current
            .write()
            .unwrap_or_else(|e| e.into_inner()) = user;
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("loading", &self.is_loading())
            .field("current_user", &self.current_user())
            .finish()
    }
}
