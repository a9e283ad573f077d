//! Interaction state for facade.
//!
//! An [`EditingSession`] holds the document being customised together with
//! the selected element and viewport. A [`SiteFile`] persists the starting
//! template and its edits. The [`carousel`] module models the gallery slide
//! carousel with explicit timers.

pub mod carousel;
pub mod session;
pub mod site;

pub use carousel::{Carousel, CarouselDriver, CarouselError, CarouselInput, Phase};
pub use session::{EditingSession, SessionError};
pub use site::{SiteConfig, SiteError, SiteFile, SITE_FILE};
