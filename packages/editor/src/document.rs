//! # Page Document
//!
//! Editing state for one open page: the section collection, its snapshot
//! history, a monotonically increasing version, and the dirty flag the
//! workspace uses to know whether a save is pending.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit (mutations, undo/redo) → Save
//!   ↓        ↓                           ↓
//! Page    snapshots                    Page
//! ```
//!
//! Every applied mutation commits a full copy of the section list to the
//! history. No-op mutations commit nothing — undo always steps to a state
//! that actually differed.

use crate::collection::Collection;
use crate::drag::DragState;
use crate::history::History;
use crate::mutations::{MutationError, MutationOutcome, SectionMutation};
use pagecraft_model::{Page, Section};

/// Editable page document
#[derive(Debug, Clone)]
pub struct PageDocument {
    page_id: String,
    title: String,
    sections: Collection<Section>,
    history: History<Vec<Section>>,
    drag: DragState,
    /// Increments on every state change (mutation, undo, redo)
    version: u64,
    dirty: bool,
}

impl PageDocument {
    /// Create an empty document for a page that has never been saved
    pub fn new(page_id: impl Into<String>) -> Self {
        Self::from_page(Page::new(page_id))
    }

    /// Open a document over an existing page
    pub fn from_page(page: Page) -> Self {
        let sections = Collection::from_items(page.sections);
        let history = History::new(sections.items().to_vec());
        Self {
            page_id: page.id,
            title: page.title,
            sections,
            history,
            drag: DragState::new(),
            version: 0,
            dirty: false,
        }
    }

    /// Assemble the current state as a persistable page
    pub fn page(&self) -> Page {
        Page {
            id: self.page_id.clone(),
            title: self.title.clone(),
            sections: self.sections.items().to_vec(),
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.dirty = true;
    }

    pub fn sections(&self) -> &Collection<Section> {
        &self.sections
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the workspace after a successful save
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Apply a mutation; applied mutations snapshot the resulting state
    pub fn apply(&mut self, mutation: &SectionMutation) -> Result<MutationOutcome, MutationError> {
        let outcome = mutation.apply(&mut self.sections)?;
        if outcome.is_applied() {
            self.history.commit(self.sections.items().to_vec());
            self.version += 1;
            self.dirty = true;
        }
        Ok(outcome)
    }

    /// Step back one snapshot; false if already at the oldest state
    pub fn undo(&mut self) -> bool {
        let restored = match self.history.undo() {
            Some(snapshot) => snapshot.clone(),
            None => return false,
        };
        self.sections.replace_items(restored);
        self.version += 1;
        self.dirty = true;
        true
    }

    /// Step forward one snapshot; false if already at the newest state
    pub fn redo(&mut self) -> bool {
        let restored = match self.history.redo() {
            Some(snapshot) => snapshot.clone(),
            None => return false,
        };
        self.sections.replace_items(restored);
        self.version += 1;
        self.dirty = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn select(&mut self, section_id: &str) -> bool {
        self.sections.select(section_id)
    }

    pub fn clear_selection(&mut self) {
        self.sections.clear_selection();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.sections.selected_id()
    }

    /// Start dragging the section at `index`
    ///
    /// Rejected for out-of-range indices and locked sections, in which
    /// case no gesture begins.
    pub fn begin_drag(&mut self, index: usize) -> Result<(), MutationError> {
        let len = self.sections.len();
        if index >= len {
            return Err(MutationError::IndexOutOfRange { index, len });
        }
        let section = &self.sections.items()[index];
        if section.locked {
            return Err(MutationError::Locked(section.id.clone()));
        }
        self.drag.begin(index);
        Ok(())
    }

    /// Pointer moved over `hovered` during a drag
    ///
    /// Performs the move immediately (live reorder) and re-tracks the
    /// dragged index at its new position. With no active gesture, or when
    /// hovering the dragged item's own index, nothing happens.
    pub fn drag_over(&mut self, hovered: usize) -> Result<MutationOutcome, MutationError> {
        let from = match self.drag.dragging() {
            Some(index) => index,
            None => {
                return Ok(MutationOutcome::Noop {
                    reason: "no active drag".to_string(),
                })
            }
        };
        if from == hovered {
            return Ok(MutationOutcome::Noop {
                reason: "already at hovered index".to_string(),
            });
        }

        let outcome = self.apply(&SectionMutation::MoveSection {
            from,
            to: hovered,
        })?;
        self.drag.track(hovered);
        Ok(outcome)
    }

    /// Pointer released; the gesture ends, order stays as last hovered
    pub fn end_drag(&mut self) {
        self.drag.finish();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }
}
