//! Rendering for facade templates.
//!
//! Projects a template document onto a viewport, renders it to a page
//! structure and then to HTML, and builds static sites from documents or a
//! whole catalog.

pub mod assets;
pub mod builder;
pub mod layout;
pub mod page;
pub mod templates;
pub mod viewport;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use layout::{layout_for, ContactForm, Density, FieldError, Layout};
pub use page::{
    render, FooterBlock, HeaderBlock, Navigation, PageStructure, SectionBlock, SelectionTarget,
    FOOTER_TARGET, HEADER_TARGET,
};
pub use templates::{FilterCount, GalleryCard, GalleryContext, HtmlRenderer, PageContext};
pub use viewport::{project, Dimension, Viewport, ViewportMode};
