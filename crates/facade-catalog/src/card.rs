//! Gallery card summaries.

use facade_model::{Category, TemplateDocument};
use serde::Serialize;

/// Description shown for templates without any body section.
pub const PLACEHOLDER_DESCRIPTION: &str = "Professional template ready for customization";

/// What a gallery shows for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateCard {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// First section's content, or [`PLACEHOLDER_DESCRIPTION`]
    pub description: String,
    pub thumbnail: String,
    /// Primary, secondary and accent colors
    pub swatches: [String; 3],
}

impl TemplateCard {
    pub fn from_document(template: &TemplateDocument) -> Self {
        let description = template
            .first_section()
            .map(|s| s.content.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or(PLACEHOLDER_DESCRIPTION)
            .to_string();

        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            category: template.category,
            description,
            thumbnail: template.thumbnail.clone(),
            swatches: [
                template.colors.primary.clone(),
                template.colors.secondary.clone(),
                template.colors.accent.clone(),
            ],
        }
    }
}
