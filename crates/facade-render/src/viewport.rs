//! Viewport projection for desktop, tablet and mobile previews.

use std::fmt;
use std::str::FromStr;

use facade_model::UnknownVariant;
use serde::{Deserialize, Serialize};

/// Logical preview mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportMode {
    pub const ALL: [ViewportMode; 3] = [
        ViewportMode::Desktop,
        ViewportMode::Tablet,
        ViewportMode::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Tablet => "Tablet",
            Self::Mobile => "Mobile",
        }
    }

    /// Mobile previews use condensed spacing and a collapsed menu.
    #[inline]
    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewportMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("viewport mode", s))
    }
}

/// One axis of a preview box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Fill the parent container
    Fill,
    /// Fixed size in CSS pixels
    Units(u32),
}

impl Dimension {
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Fill => "100%".to_string(),
            Dimension::Units(n) => format!("{}px", n),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Preview box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub width: Dimension,
    pub height: Dimension,
}

/// Map a viewport mode to its preview box.
pub fn project(mode: ViewportMode) -> Viewport {
    match mode {
        ViewportMode::Desktop => Viewport {
            width: Dimension::Fill,
            height: Dimension::Fill,
        },
        ViewportMode::Tablet => Viewport {
            width: Dimension::Units(768),
            height: Dimension::Units(1024),
        },
        ViewportMode::Mobile => Viewport {
            width: Dimension::Units(375),
            height: Dimension::Units(667),
        },
    }
}
