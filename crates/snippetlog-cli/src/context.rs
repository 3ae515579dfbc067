//! Client construction and session handling shared by every command.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use directories::ProjectDirs;
use tokio::sync::broadcast;
use tracing::debug;

use snippetlog_client::{ClientConfig, Guarded, Route, SessionEvent, SnippetClient};
use snippetlog_core::CredentialStore;
use snippetlog_core::error::AuthError;
use snippetlog_store::FileCredentialStore;

use crate::cli::ConnectionArgs;
use crate::output;

/// Everything a command needs to talk to the API.
pub struct Context {
    client: SnippetClient,
    events: Mutex<broadcast::Receiver<SessionEvent>>,
}

impl Context {
    pub fn new(args: &ConnectionArgs) -> Result<Self> {
        let config = ClientConfig::new(args.api_url.clone())
            .with_timeout(Duration::from_secs(args.timeout_secs));
        let store = open_store(args)?;

        let client = SnippetClient::new(config, store).context("Failed to create API client")?;

        let events = Mutex::new(client.subscribe());

        Ok(Self { client, events })
    }

    pub fn client(&self) -> &SnippetClient {
        &self.client
    }

    /// Pass `route` through the route guard.
    ///
    /// A redirect becomes an error telling the user to log in.
    pub fn require_login(&self, route: Route) -> Result<Route> {
        match self.client.guard(route) {
            Guarded::Render(route) => Ok(route),
            Guarded::Loading => bail!("Session is still loading"),
            Guarded::Redirect(redirect) => Err(anyhow::Error::new(AuthError::NotLoggedIn)
                .context(format!(
                    "Not logged in (redirected to {}). Run 'snippetlog login' first.",
                    redirect.to
                ))),
        }
    }

    /// Report session events raised while a command ran.
    pub fn report_session_events(&self) {
        for event in self.take_session_events() {
            if let SessionEvent::Invalidated { reason } = event {
                output::error(&format!(
                    "Session ended ({}). Redirecting to {}: run 'snippetlog login' to continue.",
                    reason,
                    Route::Login
                ));
            }
        }
    }

    /// Apply queued session events without reporting them.
    ///
    /// Used after a logout, where a teardown raised by the revoke call is
    /// already covered by the logout itself.
    pub fn discard_session_events(&self) {
        let discarded = self.take_session_events();
        debug!(count = discarded.len(), "Discarded session events");
    }

    fn take_session_events(&self) -> Vec<SessionEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        self.client.drain_events(&mut events)
    }
}

fn open_store(args: &ConnectionArgs) -> Result<Arc<dyn CredentialStore>> {
    #[cfg(feature = "keyring")]
    if args.keyring {
        debug!("Using OS keychain credential store");
        return Ok(Arc::new(snippetlog_store::KeyringCredentialStore::new()));
    }

    let dir = match &args.store_dir {
        Some(dir) => dir.clone(),
        None => default_store_dir()?,
    };
    debug!(dir = %dir.display(), "Using file credential store");

    Ok(Arc::new(FileCredentialStore::open(dir)))
}

fn default_store_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "snippetlog").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
