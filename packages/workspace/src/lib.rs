//! # Pagecraft Workspace
//!
//! Hosts open page documents over a pluggable page store and exposes the
//! editing API over HTTP for the designer frontend.
//!
//! Edits are optimistic: mutations land on the in-memory document
//! immediately; persistence happens on explicit save and a failed save
//! leaves local state exactly as it was.

pub mod server;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests_workspace;

pub use server::WorkspaceServer;
pub use state::{WorkspaceError, WorkspaceState};
pub use store::{FsPageStore, MemoryPageStore, PageStore, PageSummary, StoreError, StoredPage};
