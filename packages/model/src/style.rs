use serde::{Deserialize, Serialize};

/// Font weight steps exposed by the typography panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Regular,
    Medium,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Box-shadow presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    None,
    Soft,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    pub text_color: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_weight: FontWeight::Regular,
            text_align: TextAlign::Left,
            text_color: "#1f2937".to_string(),
        }
    }
}

/// Vertical and horizontal padding, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub padding_top: u32,
    pub padding_bottom: u32,
    pub padding_x: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            padding_top: 48,
            padding_bottom: 48,
            padding_x: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub color: String,
    pub image_url: Option<String>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effects {
    pub corner_radius: u32,
    pub shadow: ShadowLevel,
    /// Opacity in percent (0-100)
    pub opacity: u8,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            corner_radius: 0,
            shadow: ShadowLevel::None,
            opacity: 100,
        }
    }
}

/// Per-section style properties, grouped the way the style panel groups them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProps {
    pub typography: Typography,
    pub spacing: Spacing,
    pub background: Background,
    pub effects: Effects,
}

/// A single style property update, as emitted by one style panel control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "snake_case")]
pub enum StyleProperty {
    FontSize(u32),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
    TextColor(String),
    PaddingTop(u32),
    PaddingBottom(u32),
    PaddingX(u32),
    BackgroundColor(String),
    BackgroundImage(Option<String>),
    CornerRadius(u32),
    Shadow(ShadowLevel),
    Opacity(u8),
}

impl StyleProps {
    /// Apply a single property update in place
    pub fn set(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::FontSize(v) => self.typography.font_size = v,
            StyleProperty::FontWeight(v) => self.typography.font_weight = v,
            StyleProperty::TextAlign(v) => self.typography.text_align = v,
            StyleProperty::TextColor(v) => self.typography.text_color = v,
            StyleProperty::PaddingTop(v) => self.spacing.padding_top = v,
            StyleProperty::PaddingBottom(v) => self.spacing.padding_bottom = v,
            StyleProperty::PaddingX(v) => self.spacing.padding_x = v,
            StyleProperty::BackgroundColor(v) => self.background.color = v,
            StyleProperty::BackgroundImage(v) => self.background.image_url = v,
            StyleProperty::CornerRadius(v) => self.effects.corner_radius = v,
            StyleProperty::Shadow(v) => self.effects.shadow = v,
            StyleProperty::Opacity(v) => self.effects.opacity = v.min(100),
        }
    }
}
