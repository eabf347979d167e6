//! # Section Mutations
//!
//! High-level semantic operations on a page's section list.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is one user gesture (palette
//!    click, rename, style control change, drag step)
//! 2. **Validated**: structural constraints are checked before anything
//!    changes
//! 3. **Lenient on identity**: a mutation that targets an id no longer in
//!    the page reports a no-op, never an error
//!
//! ## Mutation Semantics
//!
//! ### ReplaceContent
//! - Atomic replacement of the whole content block (not a field diff)
//! - The replacement must be the same kind as the section — a hero stays
//!   a hero
//!
//! ### MoveSection
//! - Remove at `from`, reinsert at `to`
//! - Out-of-range indices are rejected; the sequence is never corrupted
//! - A locked section cannot be the source of a move
//!
//! ### RemoveSection
//! - Clears the selection if the removed section was selected

use crate::collection::{Collection, CollectionItem};
use pagecraft_model::{Section, SectionContent, SectionKind, StyleProperty};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations on the section list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SectionMutation {
    /// Add a palette section to the end of the page
    AppendSection { kind: SectionKind },

    /// Replace a section's content block (same kind only)
    ReplaceContent {
        section_id: String,
        content: SectionContent,
    },

    /// Rename a section in the layer list
    RenameSection { section_id: String, name: String },

    /// Set one style property
    SetStyleProperty {
        section_id: String,
        property: StyleProperty,
    },

    /// Show or hide a section without removing it
    SetVisibility { section_id: String, visible: bool },

    /// Lock or unlock a section against reordering
    SetLocked { section_id: String, locked: bool },

    RemoveSection { section_id: String },

    /// Copy a section; the copy lands immediately after the source
    DuplicateSection { section_id: String },

    /// Reorder: remove at `from`, reinsert at `to`
    MoveSection { from: usize, to: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("index {index} out of range (collection length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item is locked: {0}")]
    Locked(String),

    #[error("content kind mismatch: section is {expected:?}, replacement is {got:?}")]
    KindMismatch {
        expected: SectionKind,
        got: SectionKind,
    },
}

/// What a tolerated mutation actually did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MutationOutcome {
    Applied,
    /// The mutation had no effect (target gone, already at position)
    Noop { reason: String },
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }

    fn missing(section_id: &str) -> Self {
        MutationOutcome::Noop {
            reason: format!("section not found: {section_id}"),
        }
    }
}

impl CollectionItem for Section {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn locked(&self) -> bool {
        self.locked
    }

    fn mark_as_copy(&mut self) {
        self.name = format!("{} (copy)", self.name);
    }
}

impl SectionMutation {
    /// Check structural constraints without applying
    pub fn validate(&self, sections: &Collection<Section>) -> Result<(), MutationError> {
        match self {
            SectionMutation::MoveSection { from, to } => {
                let len = sections.len();
                if *from >= len {
                    return Err(MutationError::IndexOutOfRange { index: *from, len });
                }
                if *to >= len {
                    return Err(MutationError::IndexOutOfRange { index: *to, len });
                }
                let source = &sections.items()[*from];
                if source.locked {
                    return Err(MutationError::Locked(source.id.clone()));
                }
                Ok(())
            }

            SectionMutation::ReplaceContent {
                section_id,
                content,
            } => {
                // Absent ids fall through to a no-op at apply time
                if let Some(section) = sections.get(section_id) {
                    if section.kind() != content.kind() {
                        return Err(MutationError::KindMismatch {
                            expected: section.kind(),
                            got: content.kind(),
                        });
                    }
                }
                Ok(())
            }

            _ => Ok(()),
        }
    }

    /// Validate, then apply to the section list
    pub fn apply(
        &self,
        sections: &mut Collection<Section>,
    ) -> Result<MutationOutcome, MutationError> {
        self.validate(sections)?;

        match self {
            SectionMutation::AppendSection { kind } => {
                sections.append(Section::new(*kind));
                Ok(MutationOutcome::Applied)
            }

            SectionMutation::ReplaceContent {
                section_id,
                content,
            } => {
                let found = sections.update(section_id, |section| {
                    section.content = content.clone();
                });
                Ok(applied_or_missing(found, section_id))
            }

            SectionMutation::RenameSection { section_id, name } => {
                let found = sections.update(section_id, |section| {
                    section.name = name.clone();
                });
                Ok(applied_or_missing(found, section_id))
            }

            SectionMutation::SetStyleProperty {
                section_id,
                property,
            } => {
                let found = sections.update(section_id, |section| {
                    section.style.set(property.clone());
                });
                Ok(applied_or_missing(found, section_id))
            }

            SectionMutation::SetVisibility {
                section_id,
                visible,
            } => {
                let found = sections.update(section_id, |section| {
                    section.visible = *visible;
                });
                Ok(applied_or_missing(found, section_id))
            }

            SectionMutation::SetLocked { section_id, locked } => {
                let found = sections.update(section_id, |section| {
                    section.locked = *locked;
                });
                Ok(applied_or_missing(found, section_id))
            }

            SectionMutation::RemoveSection { section_id } => {
                let removed = sections.remove(section_id).is_some();
                Ok(applied_or_missing(removed, section_id))
            }

            SectionMutation::DuplicateSection { section_id } => {
                let duplicated = sections.duplicate(section_id).is_some();
                Ok(applied_or_missing(duplicated, section_id))
            }

            SectionMutation::MoveSection { from, to } => {
                if from == to {
                    return Ok(MutationOutcome::Noop {
                        reason: "already at target index".to_string(),
                    });
                }
                sections.move_item(*from, *to)?;
                Ok(MutationOutcome::Applied)
            }
        }
    }
}

fn applied_or_missing(found: bool, section_id: &str) -> MutationOutcome {
    if found {
        MutationOutcome::Applied
    } else {
        MutationOutcome::missing(section_id)
    }
}
