//! The client facade.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use snippetlog_core::{CredentialStore, Result};

use crate::auth::AuthService;
use crate::config::ClientConfig;
use crate::events::SessionEvent;
use crate::guard::{self, Guarded};
use crate::session::SessionState;
use crate::snippets::SnippetService;
use crate::transport::AuthedTransport;

/// One transport, one session, and the services that use them.
///
/// The session is hydrated from the store during construction, so
/// [`SessionState::is_loading`] is already false when `new` returns.
/// Events published by the transport are applied to the session before
/// [`session`](SnippetClient::session) and [`guard`](SnippetClient::guard)
/// answer, so a teardown is visible without the host draining anything.
#[derive(Debug, Clone)]
pub struct SnippetClient {
    transport: AuthedTransport,
    session: SessionState,
    auth: AuthService,
    snippets: SnippetService,
    pending: Arc<Mutex<broadcast::Receiver<SessionEvent>>>,
}

impl SnippetClient {
    /// Build a client over `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let transport = AuthedTransport::new(config, store.clone())?;
        let session = SessionState::new(store);
        session.hydrate();
        let pending = Arc::new(Mutex::new(transport.subscribe()));

        Ok(Self {
            auth: AuthService::new(transport.clone(), session.clone()),
            snippets: SnippetService::new(transport.clone()),
            transport,
            session,
            pending,
        })
    }

    /// The session, with pending transport events applied.
    pub fn session(&self) -> &SessionState {
        self.sync_session();
        &self.session
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn snippets(&self) -> &SnippetService {
        &self.snippets
    }

    pub fn transport(&self) -> &AuthedTransport {
        &self.transport
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.transport.subscribe()
    }

    /// Guard a protected view against the current session.
    pub fn guard<V>(&self, view: V) -> Guarded<V> {
        self.sync_session();
        guard::guard(&self.session, view)
    }

    /// Apply every event queued on `events` to the session and return them.
    pub fn drain_events(&self, events: &mut broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
        self.sync_session();
        let drained = self.apply_pending(events);
        debug!(count = drained.len(), "Session events drained");
        drained
    }

    fn sync_session(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        self.apply_pending(&mut pending);
    }

    fn apply_pending(&self, events: &mut broadcast::Receiver<SessionEvent>) -> Vec<SessionEvent> {
        let mut applied = Vec::new();
        loop {
            match events.try_recv() {
                Ok(event) => {
                    self.session.apply(&event);
                    applied.push(event);
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Session events dropped, re-reading credential store");
                    self.session.revalidate();
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        applied
    }
}
