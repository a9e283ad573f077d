//! Per-section layout rules.
//!
//! Each [`SectionKind`] maps to one rule that decides which fixed affordances
//! accompany the section's title and content. The affordances are compiled in
//! and never come from the document, apart from the palette colors they use.

use std::collections::HashMap;

use facade_model::{Palette, SectionKind};
use serde::Serialize;

use crate::viewport::ViewportMode;

const FEATURES: [&str; 3] = ["Strategy", "Development", "Support"];
const PRODUCT_COUNT: u32 = 3;
const GALLERY_SLOTS: u32 = 8;
const GALLERY_PHOTO_BASE: u32 = 3_000_000;
const HIGHLIGHTS: [&str; 3] = ["Expert Team", "Quality Service", "24/7 Support"];

/// Spacing and sizing scale derived from the viewport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Regular,
    Compact,
}

impl Density {
    pub fn for_mode(mode: ViewportMode) -> Self {
        if mode.is_compact() {
            Density::Compact
        } else {
            Density::Regular
        }
    }

    fn columns(&self, compact: u8, regular: u8) -> u8 {
        match self {
            Density::Compact => compact,
            Density::Regular => regular,
        }
    }
}

/// A button colored from the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub color: String,
}

impl Button {
    fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub icon_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub price: String,
    pub price_color: String,
    pub button: Button,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: String,
    pub marker_color: String,
}

/// Icon shown next to a contact detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactIcon {
    Mail,
    Phone,
    MapPin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub icon: ContactIcon,
    pub label: String,
    pub value: String,
    /// Primary color at low alpha, used behind the icon
    pub tint: String,
    pub icon_color: String,
}

/// Input control kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Textarea { rows: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub placeholder: String,
    pub kind: FieldKind,
}

/// Errors reported by [`ContactForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Missing value for {0}")]
    Missing(String),

    #[error("Not an email address: {0}")]
    InvalidEmail(String),
}

/// Contact form. Checked for shape only, never submitted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub submit: Button,
}

impl ContactForm {
    /// Check a set of field values against the form's structure.
    pub fn validate(&self, values: &HashMap<String, String>) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = values.get(&field.name).map(|v| v.trim()).unwrap_or("");
            if value.is_empty() {
                errors.push(FieldError::Missing(field.name.clone()));
                continue;
            }
            if field.kind == FieldKind::Email && !looks_like_email(value) {
                errors.push(FieldError::InvalidEmail(field.name.clone()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Fixed affordances of a section, keyed by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    Hero {
        call_to_action: Button,
    },
    Features {
        columns: u8,
        cards: Vec<FeatureCard>,
    },
    Products {
        columns: u8,
        cards: Vec<ProductCard>,
    },
    Gallery {
        columns: u8,
        slots: Vec<ImageSlot>,
    },
    About {
        columns: u8,
        highlights: Vec<Highlight>,
        button: Button,
    },
    Contact {
        columns: u8,
        details: Vec<ContactDetail>,
        form: ContactForm,
    },
    Testimonials,
}

/// Select and evaluate the layout rule for a section kind.
pub fn layout_for(kind: SectionKind, palette: &Palette, density: Density) -> Layout {
    match kind {
        SectionKind::Hero => hero(palette),
        SectionKind::Features => features(palette, density),
        SectionKind::Products => products(palette, density),
        SectionKind::Gallery => gallery(density),
        SectionKind::About => about(palette, density),
        SectionKind::Contact => contact(palette, density),
        SectionKind::Testimonials => Layout::Testimonials,
    }
}

fn hero(palette: &Palette) -> Layout {
    Layout::Hero {
        call_to_action: Button::new("Get Started", &palette.primary),
    }
}

fn features(palette: &Palette, density: Density) -> Layout {
    Layout::Features {
        columns: density.columns(1, 3),
        cards: FEATURES
            .iter()
            .map(|name| FeatureCard {
                title: name.to_string(),
                description: format!(
                    "Professional {} services tailored to your needs.",
                    name.to_lowercase()
                ),
                icon_color: palette.primary.clone(),
            })
            .collect(),
    }
}

fn products(palette: &Palette, density: Density) -> Layout {
    Layout::Products {
        columns: density.columns(1, 3),
        cards: (1..=PRODUCT_COUNT)
            .map(|n| ProductCard {
                title: format!("Product {}", n),
                description: "Amazing product description here.".to_string(),
                price: "$99.99".to_string(),
                price_color: palette.primary.clone(),
                button: Button::new("Add to Cart", &palette.primary),
            })
            .collect(),
    }
}

fn gallery(density: Density) -> Layout {
    Layout::Gallery {
        columns: density.columns(2, 4),
        slots: (1..=GALLERY_SLOTS)
            .map(|n| {
                let photo = GALLERY_PHOTO_BASE + n;
                ImageSlot {
                    src: format!(
                        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
                    ),
                    alt: format!("Gallery item {}", n),
                }
            })
            .collect(),
    }
}

fn about(palette: &Palette, density: Density) -> Layout {
    Layout::About {
        columns: density.columns(1, 2),
        highlights: HIGHLIGHTS
            .iter()
            .map(|label| Highlight {
                label: label.to_string(),
                marker_color: palette.primary.clone(),
            })
            .collect(),
        button: Button::new("Learn More", &palette.primary),
    }
}

fn contact(palette: &Palette, density: Density) -> Layout {
    let detail = |icon, label: &str, value: &str| ContactDetail {
        icon,
        label: label.to_string(),
        value: value.to_string(),
        tint: format!("{}20", palette.primary),
        icon_color: palette.primary.clone(),
    };
    let field = |name: &str, placeholder: &str, kind| FormField {
        name: name.to_string(),
        placeholder: placeholder.to_string(),
        kind,
    };

    Layout::Contact {
        columns: density.columns(1, 2),
        details: vec![
            detail(ContactIcon::Mail, "Email", "contact@example.com"),
            detail(ContactIcon::Phone, "Phone", "+1 (555) 123-4567"),
            detail(ContactIcon::MapPin, "Address", "123 Business St, City, State"),
        ],
        form: ContactForm {
            fields: vec![
                field("name", "Your Name", FieldKind::Text),
                field("email", "Your Email", FieldKind::Email),
                field("message", "Your Message", FieldKind::Textarea { rows: 4 }),
            ],
            submit: Button::new("Send Message", &palette.primary),
        },
    }
}
