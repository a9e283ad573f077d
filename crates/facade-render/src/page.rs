//! Render pipeline: template document to page structure.
//!
//! [`render`] is a pure function of the document, the selected section and
//! the viewport mode. The resulting [`PageStructure`] is what both the HTML
//! templates and tests consume.

use std::fmt;

use facade_model::{Category, FooterKind, HeaderKind, Palette, SectionKind, TemplateDocument};
use serde::Serialize;

use crate::layout::{layout_for, Density, Layout};
use crate::viewport::{project, Viewport, ViewportMode};

/// Identifier reported when the header is selected.
pub const HEADER_TARGET: &str = "header";

/// Identifier reported when the footer is selected.
pub const FOOTER_TARGET: &str = "footer";

/// Something a user can select in the preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionTarget {
    Header,
    Section(String),
    Footer,
}

impl SelectionTarget {
    /// Parse a reported identifier.
    pub fn from_id(id: &str) -> Self {
        match id {
            HEADER_TARGET => SelectionTarget::Header,
            FOOTER_TARGET => SelectionTarget::Footer,
            other => SelectionTarget::Section(other.to_string()),
        }
    }

    /// The identifier reported to the caller on selection.
    pub fn id(&self) -> &str {
        match self {
            SelectionTarget::Header => HEADER_TARGET,
            SelectionTarget::Section(id) => id,
            SelectionTarget::Footer => FOOTER_TARGET,
        }
    }

    /// Section id, if a section is selected.
    pub fn section_id(&self) -> Option<&str> {
        match self {
            SelectionTarget::Section(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for SelectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How the header menu is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Navigation {
    /// Every label shown in the header bar
    Inline { items: Vec<String> },
    /// Labels folded behind a menu button
    Collapsed { items: Vec<String> },
}

impl Navigation {
    pub fn items(&self) -> &[String] {
        match self {
            Navigation::Inline { items } | Navigation::Collapsed { items } => items,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self, Navigation::Collapsed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    pub target: &'static str,
    pub kind: HeaderKind,
    pub title: String,
    pub navigation: Navigation,
    /// Search box shown (never in compact mode)
    pub search: bool,
    /// Cart affordance for shop templates
    pub cart: bool,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    pub id: String,
    pub kind: SectionKind,
    pub title: String,
    pub content: String,
    pub style: String,
    pub is_selected: bool,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterBlock {
    pub target: &'static str,
    pub kind: FooterKind,
    pub content: String,
    pub links: Vec<String>,
    pub style: String,
    /// Content and links stacked and centered
    pub centered: bool,
}

/// Structural description of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStructure {
    pub mode: ViewportMode,
    pub viewport: Viewport,
    pub density: Density,
    pub palette: Palette,
    pub header: HeaderBlock,
    pub sections: Vec<SectionBlock>,
    pub footer: FooterBlock,
}

impl PageStructure {
    /// The selected section block, if any.
    pub fn selected(&self) -> Option<&SectionBlock> {
        self.sections.iter().find(|s| s.is_selected)
    }
}

/// Project a document into a page structure.
pub fn render(
    document: &TemplateDocument,
    selected_section: Option<&str>,
    mode: ViewportMode,
) -> PageStructure {
    let density = Density::for_mode(mode);
    let compact = mode.is_compact();

    let header = &document.header;
    let items = header.navigation.clone();
    let navigation = if compact {
        Navigation::Collapsed { items }
    } else {
        Navigation::Inline { items }
    };

    let sections = document
        .body
        .sections
        .iter()
        .map(|section| SectionBlock {
            id: section.id.clone(),
            kind: section.kind,
            title: section.title.clone(),
            content: section.content.clone(),
            style: section.style.clone(),
            is_selected: selected_section == Some(section.id.as_str()),
            layout: layout_for(section.kind, &document.colors, density),
        })
        .collect();

    let footer = &document.footer;

    PageStructure {
        mode,
        viewport: project(mode),
        density,
        palette: document.colors.as_ref().clone(),
        header: HeaderBlock {
            target: HEADER_TARGET,
            kind: header.kind,
            title: header.title.clone(),
            navigation,
            search: header.has_search && !compact,
            cart: document.category == Category::Ecommerce,
            style: header.style.clone(),
        },
        sections,
        footer: FooterBlock {
            target: FOOTER_TARGET,
            kind: footer.kind,
            content: footer.content.clone(),
            links: footer.links.clone(),
            style: footer.style.clone(),
            centered: compact,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facade_catalog::TemplateCatalog;
    use pretty_assertions::assert_eq;

    fn modern_store() -> TemplateDocument {
        TemplateCatalog::builtin().instantiate("ecom-1").unwrap()
    }

    #[test]
    fn renders_header_sections_footer_in_order() {
        let page = render(&modern_store(), None, ViewportMode::Desktop);

        assert_eq!(page.header.title, "ModernStore");
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hero-1", "products-1"]);
        assert_eq!(page.sections[1].kind, SectionKind::Products);
        assert_eq!(page.footer.links.len(), 3);
        assert!(page.selected().is_none());
    }

    #[test]
    fn tags_selected_section() {
        let page = render(&modern_store(), Some("products-1"), ViewportMode::Desktop);

        assert!(!page.sections[0].is_selected);
        assert!(page.sections[1].is_selected);
        assert_eq!(page.selected().map(|s| s.id.as_str()), Some("products-1"));

        let page = render(&modern_store(), Some("header"), ViewportMode::Desktop);
        assert!(page.sections.iter().all(|s| !s.is_selected));
    }

    #[test]
    fn mobile_collapses_navigation_and_hides_search() {
        let doc = modern_store();

        let desktop = render(&doc, None, ViewportMode::Desktop);
        assert!(!desktop.header.navigation.is_collapsed());
        assert!(desktop.header.search);
        assert!(desktop.header.cart);

        let tablet = render(&doc, None, ViewportMode::Tablet);
        assert!(!tablet.header.navigation.is_collapsed());

        let mobile = render(&doc, None, ViewportMode::Mobile);
        assert!(mobile.header.navigation.is_collapsed());
        assert_eq!(mobile.header.navigation.items(), doc.header.navigation.as_slice());
        assert!(!mobile.header.search);
        assert!(mobile.footer.centered);
        assert_eq!(mobile.density, Density::Compact);
    }

    #[test]
    fn cart_only_for_ecommerce() {
        let blog = TemplateCatalog::builtin().get("blog-1").unwrap();
        let page = render(blog, None, ViewportMode::Desktop);

        assert!(!page.header.cart);
    }

    #[test]
    fn render_is_pure() {
        let doc = modern_store();
        let first = render(&doc, Some("hero-1"), ViewportMode::Tablet);
        let second = render(&doc, Some("hero-1"), ViewportMode::Tablet);

        assert_eq!(first, second);
        assert_eq!(doc, modern_store());
    }

    #[test]
    fn hero_uses_document_primary_color() {
        let page = render(&modern_store(), None, ViewportMode::Desktop);

        match &page.sections[0].layout {
            Layout::Hero { call_to_action } => assert_eq!(call_to_action.color, "#3B82F6"),
            other => panic!("unexpected layout: {:?}", other),
        }
    }

    #[test]
    fn selection_targets_round_trip() {
        assert_eq!(SelectionTarget::from_id("header"), SelectionTarget::Header);
        assert_eq!(SelectionTarget::from_id("footer"), SelectionTarget::Footer);

        let target = SelectionTarget::from_id("hero-1");
        assert_eq!(target.section_id(), Some("hero-1"));
        assert_eq!(target.id(), "hero-1");
        assert_eq!(SelectionTarget::Footer.to_string(), "footer");
    }
}
