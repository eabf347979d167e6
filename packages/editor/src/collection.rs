//! # Ordered-Item Collection
//!
//! The one mechanism shared by the section builder and the form-field
//! builder: an ordered sequence of id-addressed items plus a single-item
//! selection.
//!
//! ## Semantics
//!
//! - Order is meaningful (items render top to bottom)
//! - Ids are unique within a collection; identity is the id, not the index
//! - Operations on an absent id are no-ops — the UI may fire events for
//!   items that were just removed
//! - Moves with out-of-range indices are rejected, not clamped; a clamp
//!   would silently reorder to a position the gesture never pointed at
//! - Locked items cannot be the source of a move

use crate::mutations::MutationError;
use pagecraft_common::new_item_id;

/// Behavior the collection needs from its items
pub trait CollectionItem: Clone {
    fn id(&self) -> &str;

    /// Replace the id (used when duplicating)
    fn assign_id(&mut self, id: String);

    /// Locked items cannot be moved
    fn locked(&self) -> bool {
        false
    }

    /// Adjust the human-readable name to mark a duplicate
    fn mark_as_copy(&mut self) {}
}

/// Ordered sequence of items with single-item selection
#[derive(Debug, Clone)]
pub struct Collection<T: CollectionItem> {
    items: Vec<T>,
    selected: Option<String>,
}

impl<T: CollectionItem> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionItem> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        debug_assert!(ids_unique(&items), "collection ids must be unique");
        Self {
            items,
            selected: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Append an item to the end and select it
    pub fn append(&mut self, item: T) -> &T {
        debug_assert!(
            self.index_of(item.id()).is_none(),
            "appending duplicate id"
        );
        self.selected = Some(item.id().to_string());
        let index = self.items.len();
        self.items.push(item);
        &self.items[index]
    }

    /// Apply a partial update to the item matching `id`
    ///
    /// Returns false (and changes nothing) if the id is absent. The
    /// selection tracks items by id, so a selected item reflects the
    /// update with no extra bookkeeping.
    pub fn update<F>(&mut self, id: &str, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Remove the item matching `id`; clears selection if it was selected
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.index_of(id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.items.remove(index))
    }

    /// Insert a copy of the item matching `id` immediately after it
    ///
    /// The copy gets a fresh id and a copy-marked name, and becomes the
    /// selection. Returns None (no-op) if the id is absent.
    pub fn duplicate(&mut self, id: &str) -> Option<&T> {
        let index = self.index_of(id)?;
        let mut copy = self.items[index].clone();
        copy.assign_id(new_item_id());
        copy.mark_as_copy();
        self.selected = Some(copy.id().to_string());
        self.items.insert(index + 1, copy);
        Some(&self.items[index + 1])
    }

    /// Remove the item at `from` and reinsert it at `to`
    ///
    /// Out-of-range indices and locked sources are rejected and leave the
    /// sequence untouched.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), MutationError> {
        let len = self.items.len();
        if from >= len {
            return Err(MutationError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(MutationError::IndexOutOfRange { index: to, len });
        }
        if self.items[from].locked() {
            return Err(MutationError::Locked(self.items[from].id().to_string()));
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    /// Select the item matching `id`; no-op if absent
    pub fn select(&mut self, id: &str) -> bool {
        if self.index_of(id).is_some() {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Replace the whole item list (undo/redo restore)
    ///
    /// Selection survives only if the selected id still exists in the new
    /// state.
    pub fn replace_items(&mut self, items: Vec<T>) {
        debug_assert!(ids_unique(&items), "collection ids must be unique");
        self.items = items;
        if let Some(id) = self.selected.as_deref() {
            if self.index_of(id).is_none() {
                self.selected = None;
            }
        }
    }
}

fn ids_unique<T: CollectionItem>(items: &[T]) -> bool {
    for (i, item) in items.iter().enumerate() {
        if items[i + 1..].iter().any(|other| other.id() == item.id()) {
            return false;
        }
    }
    true
}
