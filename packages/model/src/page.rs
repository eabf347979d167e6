use crate::section::Section;
use serde::{Deserialize, Serialize};

/// A landing page: the persisted entity
///
/// Section order is meaningful — sections render top to bottom in list
/// order. Section ids are unique within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    /// Create an empty page
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "Untitled page".to_string(),
            sections: Vec::new(),
        }
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }
}
