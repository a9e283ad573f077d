//! Patch engine.
//!
//! A [`TemplatePatch`] names a subset of a document's top-level fields. Applying
//! it merges the present fields and keeps everything else, sharing unchanged
//! sub-structures with the source document. The merge is shallow: nested edits
//! rebuild the whole substructure first (see [`update_section`] and
//! [`crate::Edit`]).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::{Body, Footer, Header, Palette, Section, TemplateDocument};

/// Partial update of a template document.
///
/// `id` and `category` are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub preview: Option<String>,
    pub header: Option<Arc<Header>>,
    pub body: Option<Arc<Body>>,
    pub footer: Option<Arc<Footer>>,
    pub colors: Option<Arc<Palette>>,
}

impl TemplatePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    pub fn header(mut self, header: impl Into<Arc<Header>>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn body(mut self, body: impl Into<Arc<Body>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Arc<Footer>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn colors(mut self, colors: impl Into<Arc<Palette>>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    /// Check whether the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.thumbnail.is_none()
            && self.preview.is_none()
            && self.header.is_none()
            && self.body.is_none()
            && self.footer.is_none()
            && self.colors.is_none()
    }
}

impl TemplateDocument {
    /// Merge a patch into a copy of this document.
    pub fn apply(&self, patch: TemplatePatch) -> TemplateDocument {
        let TemplatePatch {
            name,
            thumbnail,
            preview,
            header,
            body,
            footer,
            colors,
        } = patch;

        TemplateDocument {
            id: self.id.clone(),
            name: name.unwrap_or_else(|| self.name.clone()),
            category: self.category,
            thumbnail: thumbnail.unwrap_or_else(|| self.thumbnail.clone()),
            preview: preview.unwrap_or_else(|| self.preview.clone()),
            header: header.unwrap_or_else(|| Arc::clone(&self.header)),
            body: body.unwrap_or_else(|| Arc::clone(&self.body)),
            footer: footer.unwrap_or_else(|| Arc::clone(&self.footer)),
            colors: colors.unwrap_or_else(|| Arc::clone(&self.colors)),
        }
    }
}

/// Merge `patch` into `document`, producing a new document.
pub fn apply_patch(document: &TemplateDocument, patch: TemplatePatch) -> TemplateDocument {
    document.apply(patch)
}

/// Editable text field of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionField {
    Title,
    Content,
    Style,
}

/// Rebuild a section sequence with one field of one section replaced.
///
/// Every other element is carried over as the same allocation. An unknown id
/// yields a sequence equal to the input.
pub fn update_section(
    sections: &[Arc<Section>],
    id: &str,
    field: SectionField,
    value: &str,
) -> Vec<Arc<Section>> {
    sections
        .iter()
        .map(|section| {
            if section.id != id {
                return Arc::clone(section);
            }

            let mut updated = Section::clone(section);
            match field {
                SectionField::Title => updated.title = value.to_string(),
                SectionField::Content => updated.content = value.to_string(),
                SectionField::Style => updated.style = value.to_string(),
            }
            Arc::new(updated)
        })
        .collect()
}

/// Split a single-line label list on `", "`.
///
/// Labels that themselves contain `", "` cannot round-trip.
pub fn parse_navigation(text: &str) -> Vec<String> {
    text.split(", ").map(str::to_string).collect()
}

/// Join labels into the single-line form accepted by [`parse_navigation`].
pub fn join_navigation(items: &[String]) -> String {
    items.join(", ")
}
