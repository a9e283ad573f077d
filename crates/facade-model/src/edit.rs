//! Field-level edits.
//!
//! An [`Edit`] is one `(field, value)` event coming from a customization
//! surface. Turning it into a [`TemplatePatch`] rebuilds the nested structure
//! that contains the field, which is the caller-side half of the patch
//! contract.

use serde::{Deserialize, Serialize};

use crate::document::{Body, ColorSlot, Footer, Header, TemplateDocument};
use crate::patch::{parse_navigation, update_section, SectionField, TemplatePatch};

/// A single field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum Edit {
    /// Replace the header title
    HeaderTitle { value: String },

    /// Replace the header menu from its `", "`-separated text form
    HeaderNavigation { value: String },

    /// Toggle the header search box
    HeaderSearch { value: bool },

    /// Replace a section's title
    SectionTitle { section: String, value: String },

    /// Replace a section's content
    SectionContent { section: String, value: String },

    /// Replace one palette color
    Color { slot: ColorSlot, value: String },

    /// Replace the footer text
    FooterContent { value: String },

    /// Replace the footer links from their `", "`-separated text form
    FooterLinks { value: String },
}

impl Edit {
    /// Build the top-level patch that carries this edit.
    ///
    /// Section edits naming an id absent from the document produce an empty
    /// patch.
    pub fn to_patch(&self, document: &TemplateDocument) -> TemplatePatch {
        match self {
            Edit::HeaderTitle { value } => TemplatePatch::new().header(Header {
                title: value.clone(),
                ..Header::clone(&document.header)
            }),
            Edit::HeaderNavigation { value } => TemplatePatch::new().header(Header {
                navigation: parse_navigation(value),
                ..Header::clone(&document.header)
            }),
            Edit::HeaderSearch { value } => TemplatePatch::new().header(Header {
                has_search: *value,
                ..Header::clone(&document.header)
            }),
            Edit::SectionTitle { section, value } => {
                section_patch(document, section, SectionField::Title, value)
            }
            Edit::SectionContent { section, value } => {
                section_patch(document, section, SectionField::Content, value)
            }
            Edit::Color { slot, value } => {
                TemplatePatch::new().colors(document.colors.with(*slot, value.clone()))
            }
            Edit::FooterContent { value } => TemplatePatch::new().footer(Footer {
                content: value.clone(),
                ..Footer::clone(&document.footer)
            }),
            Edit::FooterLinks { value } => TemplatePatch::new().footer(Footer {
                links: parse_navigation(value),
                ..Footer::clone(&document.footer)
            }),
        }
    }

    /// Short name of the edited field, for logging.
    pub fn field_name(&self) -> &'static str {
        match self {
            Edit::HeaderTitle { .. } => "header.title",
            Edit::HeaderNavigation { .. } => "header.navigation",
            Edit::HeaderSearch { .. } => "header.hasSearch",
            Edit::SectionTitle { .. } => "section.title",
            Edit::SectionContent { .. } => "section.content",
            Edit::Color { .. } => "colors",
            Edit::FooterContent { .. } => "footer.content",
            Edit::FooterLinks { .. } => "footer.links",
        }
    }
}

fn section_patch(
    document: &TemplateDocument,
    id: &str,
    field: SectionField,
    value: &str,
) -> TemplatePatch {
    if document.section(id).is_none() {
        return TemplatePatch::new();
    }

    TemplatePatch::new().body(Body {
        sections: update_section(&document.body.sections, id, field, value),
    })
}

impl TemplateDocument {
    /// Apply a single field edit, producing a new document.
    pub fn edit(&self, edit: &Edit) -> TemplateDocument {
        self.apply(edit.to_patch(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Category, FooterKind, HeaderKind, Palette, Section, SectionKind};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn document() -> TemplateDocument {
        TemplateDocument {
            id: "port-1".to_string(),
            name: "Creative Portfolio".to_string(),
            category: Category::Portfolio,
            thumbnail: String::new(),
            preview: String::new(),
            header: Arc::new(Header {
                kind: HeaderKind::Minimal,
                title: "Alex Designer".to_string(),
                navigation: parse_navigation("Work, About, Contact"),
                has_search: false,
                style: String::new(),
            }),
            body: Arc::new(Body::new(vec![
                Section::new("hero-4", SectionKind::Hero, "Creative Vision", "Ideas", ""),
                Section::new("gallery-2", SectionKind::Gallery, "Featured Work", "Projects", ""),
            ])),
            footer: Arc::new(Footer {
                kind: FooterKind::Minimal,
                content: "(c) Alex".to_string(),
                links: parse_navigation("Behance, Dribbble"),
                style: String::new(),
            }),
            colors: Arc::new(Palette {
                primary: "#7C3AED".to_string(),
                secondary: "#1E40AF".to_string(),
                accent: "#F59E0B".to_string(),
                text: "#1F2937".to_string(),
                background: "#FFFFFF".to_string(),
            }),
        }
    }

    #[test]
    fn header_title_edit_keeps_rest_of_header() {
        let doc = document();
        let edited = doc.edit(&Edit::HeaderTitle {
            value: "NewName".to_string(),
        });

        assert_eq!(edited.header.title, "NewName");
        assert_eq!(edited.header.navigation, doc.header.navigation);
        assert_eq!(edited.header.kind, doc.header.kind);
        assert!(Arc::ptr_eq(&edited.body, &doc.body));
        assert!(Arc::ptr_eq(&edited.footer, &doc.footer));
        assert!(Arc::ptr_eq(&edited.colors, &doc.colors));
        assert_eq!(doc.header.title, "Alex Designer");
    }

    #[test]
    fn navigation_edit_splits_text() {
        let edited = document().edit(&Edit::HeaderNavigation {
            value: "Home, Blog".to_string(),
        });

        assert_eq!(edited.header.navigation, vec!["Home", "Blog"]);
    }

    #[test]
    fn section_edit_touches_one_section() {
        let doc = document();
        let edited = doc.edit(&Edit::SectionContent {
            section: "gallery-2".to_string(),
            value: "Recent projects".to_string(),
        });

        let gallery = edited.section("gallery-2").unwrap();
        assert_eq!(gallery.content, "Recent projects");
        assert_eq!(gallery.title, "Featured Work");
        assert!(Arc::ptr_eq(
            &edited.body.sections[0],
            &doc.body.sections[0]
        ));
    }

    #[test]
    fn unknown_section_edit_changes_nothing() {
        let doc = document();
        let edit = Edit::SectionTitle {
            section: "nope".to_string(),
            value: "x".to_string(),
        };

        assert!(edit.to_patch(&doc).is_empty());
        let edited = doc.edit(&edit);
        assert_eq!(edited, doc);
        assert!(Arc::ptr_eq(&edited.body, &doc.body));
    }

    #[test]
    fn color_edit_replaces_one_slot() {
        let doc = document();
        let edited = doc.edit(&Edit::Color {
            slot: ColorSlot::Background,
            value: "#000000".to_string(),
        });

        assert_eq!(edited.colors.background, "#000000");
        assert_eq!(edited.colors.primary, doc.colors.primary);
    }

    #[test]
    fn deserializes_tagged_edits() {
        let edit: Edit = serde_json::from_str(
            r##"{"field": "color", "slot": "accent", "value": "#111111"}"##,
        )
        .unwrap();

        assert_eq!(
            edit,
            Edit::Color {
                slot: ColorSlot::Accent,
                value: "#111111".to_string()
            }
        );

        let edit: Edit =
            serde_json::from_str(r#"{"field": "header_search", "value": true}"#).unwrap();
        assert_eq!(edit, Edit::HeaderSearch { value: true });
    }
}
