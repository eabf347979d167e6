use pagecraft_common::new_item_id;
use serde::{Deserialize, Serialize};

/// Input field kinds offered by the form builder palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Number,
    TextArea,
    Select,
    Checkbox,
    Date,
}

impl FieldType {
    /// Every palette entry, in display order
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Number,
        FieldType::TextArea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Date,
    ];

    /// Display label shown in the palette and as the default field label
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text input",
            FieldType::Email => "Email address",
            FieldType::Phone => "Phone number",
            FieldType::Number => "Number",
            FieldType::TextArea => "Long answer",
            FieldType::Select => "Dropdown",
            FieldType::Checkbox => "Checkbox",
            FieldType::Date => "Date",
        }
    }

    /// Whether this field type carries a choice list
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select)
    }
}

/// One input field inside a form section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
    /// Choices for select fields; empty for everything else
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FormField {
    /// Create a field with a fresh id and per-type defaults
    pub fn new(field_type: FieldType) -> Self {
        let options = if field_type.has_options() {
            vec!["Option 1".to_string(), "Option 2".to_string()]
        } else {
            Vec::new()
        };

        Self {
            id: new_item_id(),
            field_type,
            label: field_type.label().to_string(),
            placeholder: String::new(),
            required: false,
            options,
        }
    }
}
