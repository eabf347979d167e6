use crate::field::{FieldType, FormField};
use crate::style::StyleProps;
use pagecraft_common::new_item_id;
use serde::{Deserialize, Serialize};

/// Section kinds offered by the section palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Testimonials,
    Form,
    Cta,
    Footer,
}

impl SectionKind {
    /// Every palette entry, in display order
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Testimonials,
        SectionKind::Form,
        SectionKind::Cta,
        SectionKind::Footer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "Hero",
            SectionKind::Features => "Features",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Form => "Form",
            SectionKind::Cta => "Call to action",
            SectionKind::Footer => "Footer",
        }
    }

    /// Default content used when a section is added from the palette
    pub fn template(&self) -> SectionContent {
        match self {
            SectionKind::Hero => SectionContent::Hero {
                heading: "Your product, explained".to_string(),
                subheading: "A short line that tells visitors why this matters.".to_string(),
                cta_label: "Get started".to_string(),
                cta_url: "#".to_string(),
            },
            SectionKind::Features => SectionContent::Features {
                heading: "What you get".to_string(),
                items: vec![
                    Feature {
                        title: "Fast".to_string(),
                        body: "Describe the first benefit here.".to_string(),
                    },
                    Feature {
                        title: "Simple".to_string(),
                        body: "Describe the second benefit here.".to_string(),
                    },
                    Feature {
                        title: "Reliable".to_string(),
                        body: "Describe the third benefit here.".to_string(),
                    },
                ],
            },
            SectionKind::Testimonials => SectionContent::Testimonials {
                heading: "Loved by our users".to_string(),
                entries: vec![Testimonial {
                    quote: "This changed how we work.".to_string(),
                    author: "Jane Doe".to_string(),
                    role: "Founder, Acme".to_string(),
                }],
            },
            SectionKind::Form => SectionContent::Form {
                heading: "Stay in the loop".to_string(),
                submit_label: "Subscribe".to_string(),
                fields: vec![FormField::new(FieldType::Email)],
            },
            SectionKind::Cta => SectionContent::Cta {
                heading: "Ready to try it?".to_string(),
                button_label: "Start now".to_string(),
                button_url: "#".to_string(),
            },
            SectionKind::Footer => SectionContent::Footer {
                text: "© Your Company".to_string(),
                links: vec![Link {
                    label: "Contact".to_string(),
                    url: "#".to_string(),
                }],
            },
        }
    }
}

/// One entry in a features grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Per-kind section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionContent {
    Hero {
        heading: String,
        subheading: String,
        cta_label: String,
        cta_url: String,
    },
    Features {
        heading: String,
        items: Vec<Feature>,
    },
    Testimonials {
        heading: String,
        entries: Vec<Testimonial>,
    },
    Form {
        heading: String,
        submit_label: String,
        fields: Vec<FormField>,
    },
    Cta {
        heading: String,
        button_label: String,
        button_url: String,
    },
    Footer {
        text: String,
        links: Vec<Link>,
    },
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Hero { .. } => SectionKind::Hero,
            SectionContent::Features { .. } => SectionKind::Features,
            SectionContent::Testimonials { .. } => SectionKind::Testimonials,
            SectionContent::Form { .. } => SectionKind::Form,
            SectionContent::Cta { .. } => SectionKind::Cta,
            SectionContent::Footer { .. } => SectionKind::Footer,
        }
    }
}

/// One section of a page
///
/// Identity is the id; position in the page's section list is the render
/// order and carries no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub content: SectionContent,
    #[serde(default)]
    pub style: StyleProps,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

fn default_visible() -> bool {
    true
}

impl Section {
    /// Create a section of the given kind with a fresh id and template content
    pub fn new(kind: SectionKind) -> Self {
        Self {
            id: new_item_id(),
            name: kind.label().to_string(),
            content: kind.template(),
            style: StyleProps::default(),
            visible: true,
            locked: false,
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}
