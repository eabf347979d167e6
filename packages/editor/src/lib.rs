//! # Pagecraft Editor
//!
//! Core editing engine for landing pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: typed sections / fields / styles     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: document lifecycle + mutations      │
//! │  - Ordered collection ops (shared core)     │
//! │  - Validated section & field mutations      │
//! │  - Whole-state snapshot history (undo/redo) │
//! │  - Live drag reorder                        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ workspace: open pages + store + HTTP API    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Ids are identity**: operations target items by id, never position
//! 2. **Lenient on missing ids**: editing a vanished item is a no-op, not
//!    an error — stale UI events must never crash the editor
//! 3. **Strict on structure**: bad move indices, locked sources, and
//!    content kind mismatches are rejected before anything changes
//! 4. **Whole-state snapshots**: history stores full copies of the section
//!    list, not diffs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{PageDocument, SectionMutation};
//! use pagecraft_model::SectionKind;
//!
//! let mut doc = PageDocument::new("landing");
//! doc.apply(&SectionMutation::AppendSection { kind: SectionKind::Hero })?;
//! doc.undo();
//! doc.redo();
//! ```

pub mod collection;
pub mod document;
pub mod drag;
pub mod fields;
pub mod history;
pub mod mutations;

pub use collection::{Collection, CollectionItem};
pub use document::PageDocument;
pub use drag::DragState;
pub use fields::{FieldMutation, FieldPatch, FormEditor};
pub use history::History;
pub use mutations::{MutationError, MutationOutcome, SectionMutation};
