//! Snippet CRUD.

use tracing::{debug, instrument};

use snippetlog_core::{Result, Snippet, SnippetDraft, SnippetId};

use crate::endpoints::{self, SnippetListResponse, SnippetResponse};
use crate::transport::{AuthedTransport, PendingRequest};

/// Snippet endpoints. Every call is authenticated.
#[derive(Debug, Clone)]
pub struct SnippetService {
    transport: AuthedTransport,
}

impl SnippetService {
    pub(crate) fn new(transport: AuthedTransport) -> Self {
        Self { transport }
    }

    /// List the user's snippets.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Snippet>> {
        let response: SnippetListResponse = self
            .transport
            .request_json(PendingRequest::get(endpoints::SNIPPETS))
            .await?;
        debug!(count = response.snippets.len(), "Snippets listed");
        Ok(response.snippets)
    }

    /// Fetch one snippet.
    #[instrument(skip(self), fields(%id))]
    pub async fn get(&self, id: &SnippetId) -> Result<Snippet> {
        let response: SnippetResponse = self
            .transport
            .request_json(PendingRequest::get(endpoints::snippet(id)))
            .await?;
        Ok(response.snippet)
    }

    /// Create a snippet.
    ///
    /// # Errors
    ///
    /// A draft with a blank title or code is rejected before any request
    /// is sent.
    #[instrument(skip(self, draft), fields(title = %draft.title, language = %draft.language))]
    pub async fn create(&self, draft: &SnippetDraft) -> Result<Snippet> {
        draft.validate()?;
        let request = PendingRequest::post(endpoints::SNIPPETS).json(draft)?;
        let snippet: Snippet = self.transport.request_json(request).await?;
        debug!(id = %snippet.id, "Snippet created");
        Ok(snippet)
    }

    /// Replace a snippet's editable fields.
    ///
    /// # Errors
    ///
    /// Same local validation as [`create`](SnippetService::create).
    #[instrument(skip(self, draft), fields(%id))]
    pub async fn update(&self, id: &SnippetId, draft: &SnippetDraft) -> Result<Snippet> {
        draft.validate()?;
        let request = PendingRequest::put(endpoints::snippet(id)).json(draft)?;
        self.transport.request_json(request).await
    }

    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &SnippetId) -> Result<()> {
        self.transport
            .request_empty(PendingRequest::delete(endpoints::snippet(id)))
            .await?;
        debug!("Snippet deleted");
        Ok(())
    }
}
