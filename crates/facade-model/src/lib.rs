//! Template document model for facade.
//!
//! This crate defines the website template schema, the patch engine that
//! derives edited documents from existing ones, and the JSON export format.

pub mod document;
pub mod edit;
pub mod export;
pub mod patch;

pub use document::{
    Body, Category, ColorSlot, Footer, FooterKind, Header, HeaderKind, Palette, Section,
    SectionKind, TemplateDocument, UnknownVariant,
};
pub use edit::Edit;
pub use export::{export, export_file_name, from_json, slugify, to_json, Export, ExportError};
pub use patch::{
    apply_patch, join_navigation, parse_navigation, update_section, SectionField, TemplatePatch,
};
