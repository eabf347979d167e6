//! # Workspace State
//!
//! Open page documents keyed by page id, over a pluggable store.
//!
//! Mutations are applied optimistically to the in-memory document; a save
//! failure is reported as an error notice and leaves the document —
//! sections, history, selection, version — exactly as it was, so the user
//! can simply retry.

use crate::store::{PageStore, PageSummary, StoreError};
use pagecraft_common::Notice;
use pagecraft_editor::{MutationError, MutationOutcome, PageDocument, SectionMutation};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Mutation rejected: {0}")]
    Mutation(#[from] MutationError),
}

/// Workspace-level cache of open documents
pub struct WorkspaceState {
    store: Arc<dyn PageStore>,
    open_pages: HashMap<String, PageDocument>,
}

impl WorkspaceState {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self {
            store,
            open_pages: HashMap::new(),
        }
    }

    /// Get the open document for `page_id`, loading it on first access
    ///
    /// A page the store has never seen starts as an empty document.
    pub fn open(&mut self, page_id: &str) -> Result<&mut PageDocument, StoreError> {
        if !self.open_pages.contains_key(page_id) {
            let doc = match self.store.load(page_id)? {
                Some(page) => {
                    debug!(page_id, sections = page.sections.len(), "opened stored page");
                    PageDocument::from_page(page)
                }
                None => {
                    debug!(page_id, "starting empty page");
                    PageDocument::new(page_id)
                }
            };
            self.open_pages.insert(page_id.to_string(), doc);
        }
        // Just inserted above when absent
        Ok(self.open_pages.get_mut(page_id).unwrap())
    }

    pub fn apply(
        &mut self,
        page_id: &str,
        mutation: &SectionMutation,
    ) -> Result<(MutationOutcome, u64), WorkspaceError> {
        let doc = self.open(page_id)?;
        let outcome = doc.apply(mutation)?;
        Ok((outcome, doc.version()))
    }

    /// Returns (changed, version)
    pub fn undo(&mut self, page_id: &str) -> Result<(bool, u64), WorkspaceError> {
        let doc = self.open(page_id)?;
        let changed = doc.undo();
        Ok((changed, doc.version()))
    }

    pub fn redo(&mut self, page_id: &str) -> Result<(bool, u64), WorkspaceError> {
        let doc = self.open(page_id)?;
        let changed = doc.redo();
        Ok((changed, doc.version()))
    }

    /// Persist an open page; the outcome is reported as a user notice
    ///
    /// Local state is only touched on success (the dirty flag clears);
    /// after a failure everything is as before the attempt.
    pub fn save(&mut self, page_id: &str) -> Result<Notice, StoreError> {
        let store = Arc::clone(&self.store);
        let doc = self.open(page_id)?;
        let page = doc.page();

        match store.save(&page) {
            Ok(()) => {
                doc.mark_saved();
                info!(page_id, version = doc.version(), "page saved");
                Ok(Notice::success("Page saved"))
            }
            Err(e) => {
                warn!(page_id, error = %e, "page save failed");
                Ok(Notice::error(format!("Could not save page: {e}")))
            }
        }
    }

    pub fn list(&self) -> Result<Vec<PageSummary>, StoreError> {
        self.store.list()
    }

    /// Drop a page from the store; the open document (if any) is closed too
    pub fn delete(&mut self, page_id: &str) -> Result<bool, StoreError> {
        self.open_pages.remove(page_id);
        self.store.delete(page_id)
    }
}
