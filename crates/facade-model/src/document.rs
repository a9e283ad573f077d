//! Template document schema.
//!
//! A [`TemplateDocument`] is the complete editable description of one website:
//! header, ordered body sections, footer and color palette. Sub-structures are
//! held behind [`Arc`] so patched documents can share everything they did not
//! change with the document they were derived from.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a closed enumeration from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// Name of the enumeration being parsed
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Template category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ecommerce,
    Business,
    Portfolio,
    Blog,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Ecommerce,
        Category::Business,
        Category::Portfolio,
        Category::Blog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Business => "business",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
        }
    }

    /// Human readable label used by gallery listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "E-commerce",
            Self::Business => "Business",
            Self::Portfolio => "Portfolio",
            Self::Blog => "Blog",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("category", s))
    }
}

/// Header layout kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderKind {
    Navbar,
    Hero,
    Minimal,
}

/// Footer layout kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterKind {
    Minimal,
    Detailed,
    Social,
}

/// Section layout kind. Selects the layout rule used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Gallery,
    Testimonials,
    Contact,
    Products,
    About,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::Gallery,
        SectionKind::Testimonials,
        SectionKind::Contact,
        SectionKind::Products,
        SectionKind::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
            Self::Products => "products",
            Self::About => "about",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(rename = "type")]
    pub kind: HeaderKind,

    /// Site title shown in the header
    pub title: String,

    /// Menu labels in display order
    pub navigation: Vec<String>,

    /// Whether a search box is offered
    pub has_search: bool,

    /// Presentation hint, passed through untouched
    pub style: String,
}

/// One content block of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier, unique within the owning document
    pub id: String,

    #[serde(rename = "type")]
    pub kind: SectionKind,

    pub title: String,

    pub content: String,

    /// Presentation hint, passed through untouched
    pub style: String,

    /// Reserved for gating customization; not enforced
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

impl Section {
    /// Create an editable section.
    pub fn new(
        id: impl Into<String>,
        kind: SectionKind,
        title: impl Into<String>,
        content: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            content: content.into(),
            style: style.into(),
            editable: true,
        }
    }
}

/// Document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Sections in render order
    pub sections: Vec<Arc<Section>>,
}

impl Body {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections: sections.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(rename = "type")]
    pub kind: FooterKind,

    pub content: String,

    /// Link labels in display order
    pub links: Vec<String>,

    pub style: String,
}

/// Named slot of the color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Text,
    Background,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 5] = [
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::Accent,
        ColorSlot::Text,
        ColorSlot::Background,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Text => "text",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSlot {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("color slot", s))
    }
}

/// Color palette. Every slot is always present; only values change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

impl Palette {
    /// Value of one slot.
    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
            ColorSlot::Text => &self.text,
            ColorSlot::Background => &self.background,
        }
    }

    /// Copy of this palette with one slot replaced.
    pub fn with(&self, slot: ColorSlot, value: impl Into<String>) -> Self {
        let mut palette = self.clone();
        let value = value.into();
        match slot {
            ColorSlot::Primary => palette.primary = value,
            ColorSlot::Secondary => palette.secondary = value,
            ColorSlot::Accent => palette.accent = value,
            ColorSlot::Text => palette.text = value,
            ColorSlot::Background => palette.background = value,
        }
        palette
    }

    /// Slots and values in declaration order.
    pub fn entries(&self) -> [(ColorSlot, &str); 5] {
        ColorSlot::ALL.map(|slot| (slot, self.get(slot)))
    }
}

/// The root entity: one complete website template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
    /// Stable identifier, never changed by edits
    pub id: String,

    pub name: String,

    /// Fixed at creation; switching templates replaces the whole document
    pub category: Category,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Full-size preview image URL
    pub preview: String,

    pub header: Arc<Header>,

    pub body: Arc<Body>,

    pub footer: Arc<Footer>,

    pub colors: Arc<Palette>,
}

impl TemplateDocument {
    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.body
            .sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.as_ref())
    }

    /// First body section, if any.
    pub fn first_section(&self) -> Option<&Section> {
        self.body.sections.first().map(|s| s.as_ref())
    }

    /// Check that no two sections share an id.
    pub fn has_unique_section_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.body.sections.iter().all(|s| seen.insert(s.id.as_str()))
    }
}
