//! Product catalog - the mockup faces a design can be printed on.

use serde::{Deserialize, Serialize};

/// Hex values for the named swatch colors a product can offer.
pub const SWATCH_HEX: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("melange", "#bcbcbc"),
    ("light-grey", "#8d9291"),
    ("grey", "#9b978e"),
    ("red", "#D21034"),
    ("orange", "#E96B10"),
    ("black", "#000000"),
    ("light-brown", "#993300"),
    ("pistachio", "#ccffcc"),
    ("burgundy", "#96004B"),
    ("beige", "#d0c79c"),
    ("pink", "#f6b4a7"),
    ("yellow", "#FFDE1B"),
    ("light-blue", "#87c3d2"),
    ("blue", "#61B6C5"),
    ("dark-blue", "#0B2345"),
    ("green", "#289728"),
    ("gold", "#d6c389"),
    ("silver", "#CDD3CD"),
    ("lilac", "#d0a2c7"),
    ("bright-blue", "#296DC1"),
    ("dark-green", "#008800"),
    ("dark-red", "#A83C0F"),
    ("ivory", "#EEEBB6"),
    ("lime-green", "#BAE55F"),
    ("sand", "#C5BA8E"),
    ("sky-blue", "#53CAEB"),
    ("torquoise", "#48B8D2"),
    ("light-green", "#95D22B"),
];

/// Look up the hex value for a named swatch color.
#[must_use]
pub fn swatch_hex(name: &str) -> Option<&'static str> {
    SWATCH_HEX
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

/// The printable region of a product face, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    /// X position of the region.
    pub x: f64,
    /// Y position of the region.
    pub y: f64,
    /// Width of the region.
    pub width: f64,
    /// Height of the region.
    pub height: f64,
}

/// One color a product face is available in, with its own mockup imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Named swatch color (see [`SWATCH_HEX`]).
    pub name: String,
    /// Mockup background image for this color.
    pub background_image: Option<String>,
    /// Mockup overlay image for this color.
    pub overlay_image: Option<String>,
    /// Whether this variant is preselected for the face.
    #[serde(rename = "default", default)]
    pub is_default: bool,
}

impl ColorVariant {
    /// Hex value of this variant's swatch color, if it is a known name.
    #[must_use]
    pub fn hex(&self) -> Option<&'static str> {
        swatch_hex(&self.name)
    }
}

/// One selectable side/view of a customizable product.
///
/// Each face carries its own minimum print DPI and clipping region;
/// switching products replaces the current face wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFace {
    /// Display name of the face.
    pub name: String,
    /// Minimum print DPI required for images placed on this face.
    pub required_dpi: f64,
    /// Printable region in canvas coordinates.
    pub clip: ClipRect,
    /// Mockup background image.
    pub background_image: Option<String>,
    /// Mockup overlay image.
    pub overlay_image: Option<String>,
    /// Thumbnail shown in the product switcher.
    pub thumbnail: Option<String>,
    /// Available color variants.
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    /// Whether this face is preselected when the widget loads.
    #[serde(rename = "default", default)]
    pub is_default: bool,
}

impl ProductFace {
    /// The variant preselected for this face, if any.
    #[must_use]
    pub fn default_variant(&self) -> Option<&ColorVariant> {
        self.colors
            .iter()
            .find(|v| v.is_default)
            .or_else(|| self.colors.first())
    }
}

/// The set of product faces offered by the widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    /// All offered faces, in switcher order.
    pub faces: Vec<ProductFace>,
}

impl ProductCatalog {
    /// Create a catalog from a list of faces.
    #[must_use]
    pub fn new(faces: Vec<ProductFace>) -> Self {
        Self { faces }
    }

    /// Index of the face flagged as default, falling back to the first.
    #[must_use]
    pub fn default_face_index(&self) -> usize {
        self.faces
            .iter()
            .position(|f| f.is_default)
            .unwrap_or_default()
    }

    /// Get a face by index.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&ProductFace> {
        self.faces.get(index)
    }

    /// Number of faces offered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
