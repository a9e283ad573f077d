//! Starter template catalog for facade.
//!
//! Holds the built-in website templates and provides category filtering,
//! case-insensitive search and gallery card summaries. Extra templates can be
//! loaded from a directory of exported JSON documents.

mod builtin;
pub mod card;
pub mod catalog;

pub use card::{TemplateCard, PLACEHOLDER_DESCRIPTION};
pub use catalog::{
    filter_by_category, is_valid_id, list_templates, search, CatalogError, CategoryFilter,
    TemplateCatalog,
};
