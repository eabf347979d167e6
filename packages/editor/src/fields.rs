//! # Form-Field Builder
//!
//! The field builder edits the ordered field list of a form section. It is
//! the same ordered-collection mechanism as the section builder — append,
//! typed partial update, remove, duplicate, live drag reorder — without a
//! history stack: field edits land inside the form section's content, and
//! committing that content back to the page is what gets snapshotted.

use crate::collection::{Collection, CollectionItem};
use crate::drag::DragState;
use crate::mutations::{MutationError, MutationOutcome};
use pagecraft_model::{FieldType, FormField};
use serde::{Deserialize, Serialize};

impl CollectionItem for FormField {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn mark_as_copy(&mut self) {
        self.label = format!("{} (copy)", self.label);
    }
}

/// Typed partial update for a field — unset members leave the field as is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.placeholder.is_none()
            && self.required.is_none()
            && self.options.is_none()
    }

    fn merge_into(&self, field: &mut FormField) {
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = placeholder.clone();
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(options) = &self.options {
            field.options = options.clone();
        }
    }
}

/// Semantic mutations on the field list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldMutation {
    /// Add a palette field to the end of the form
    AppendField { field_type: FieldType },

    /// Merge a partial update into a field
    UpdateField { field_id: String, patch: FieldPatch },

    RemoveField { field_id: String },

    /// Copy a field; the copy lands immediately after the source
    DuplicateField { field_id: String },

    /// Reorder: remove at `from`, reinsert at `to`
    MoveField { from: usize, to: usize },
}

/// Editor state for one form's field list
#[derive(Debug, Clone, Default)]
pub struct FormEditor {
    fields: Collection<FormField>,
    drag: DragState,
}

impl FormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Vec<FormField>) -> Self {
        Self {
            fields: Collection::from_items(fields),
            drag: DragState::new(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        self.fields.items()
    }

    /// Hand the edited list back (to be committed into the form section)
    pub fn into_fields(self) -> Vec<FormField> {
        self.fields.into_items()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.fields.selected_id()
    }

    pub fn select(&mut self, field_id: &str) -> bool {
        self.fields.select(field_id)
    }

    pub fn clear_selection(&mut self) {
        self.fields.clear_selection();
    }

    pub fn apply(&mut self, mutation: &FieldMutation) -> Result<MutationOutcome, MutationError> {
        match mutation {
            FieldMutation::AppendField { field_type } => {
                self.fields.append(FormField::new(*field_type));
                Ok(MutationOutcome::Applied)
            }

            FieldMutation::UpdateField { field_id, patch } => {
                let found = self.fields.update(field_id, |field| {
                    patch.merge_into(field);
                });
                Ok(applied_or_missing(found, field_id))
            }

            FieldMutation::RemoveField { field_id } => {
                let removed = self.fields.remove(field_id).is_some();
                Ok(applied_or_missing(removed, field_id))
            }

            FieldMutation::DuplicateField { field_id } => {
                let duplicated = self.fields.duplicate(field_id).is_some();
                Ok(applied_or_missing(duplicated, field_id))
            }

            FieldMutation::MoveField { from, to } => {
                if from == to {
                    return Ok(MutationOutcome::Noop {
                        reason: "already at target index".to_string(),
                    });
                }
                self.fields.move_item(*from, *to)?;
                Ok(MutationOutcome::Applied)
            }
        }
    }

    /// Start dragging the field at `index`
    pub fn begin_drag(&mut self, index: usize) -> Result<(), MutationError> {
        let len = self.fields.len();
        if index >= len {
            return Err(MutationError::IndexOutOfRange { index, len });
        }
        self.drag.begin(index);
        Ok(())
    }

    /// Pointer moved over `hovered` during a drag — live reorder
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

        let outcome = self.apply(&FieldMutation::MoveField {
            from,
            to: hovered,
        })?;
        self.drag.track(hovered);
        Ok(outcome)
    }

    pub fn end_drag(&mut self) {
        self.drag.finish();
    }
}

fn applied_or_missing(found: bool, field_id: &str) -> MutationOutcome {
    if found {
        MutationOutcome::Applied
    } else {
        MutationOutcome::Noop {
            reason: format!("field not found: {field_id}"),
        }
    }
}
