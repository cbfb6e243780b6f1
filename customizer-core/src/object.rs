//! Canvas objects - the building blocks of a customization scene.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a canvas object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(Uuid);

impl ObjectId {
    /// Create a new unique object ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source format of an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image.
    Png,
    /// JPEG image.
    Jpeg,
    /// SVG vector image.
    Svg,
    /// WebP image.
    WebP,
    /// PDF artwork.
    Pdf,
    /// PostScript artwork.
    PostScript,
}

impl ImageFormat {
    /// Whether this format is resolution-independent vector artwork.
    #[must_use]
    pub fn is_vector(self) -> bool {
        matches!(self, Self::Svg | Self::Pdf | Self::PostScript)
    }

    /// Map a MIME type to a format, if recognized.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(Self::Png),
            "image/jpeg" => Some(Self::Jpeg),
            "image/svg+xml" => Some(Self::Svg),
            "image/webp" => Some(Self::WebP),
            "application/pdf" => Some(Self::Pdf),
            "application/postscript" => Some(Self::PostScript),
            _ => None,
        }
    }
}

/// The content of a canvas object.
///
/// A tagged variant rather than a dynamically-probed "type" field: each
/// variant carries only the fields that exist for that kind of object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ObjectKind {
    /// A raster or vector image placed from the upload list.
    Image {
        /// Image source URI.
        src: String,
        /// Source format.
        format: ImageFormat,
        /// Native pixel width of the source.
        native_width: f64,
        /// Native pixel height of the source.
        native_height: f64,
    },

    /// A text label with its styling.
    Text {
        /// Text content.
        content: String,
        /// Font family name.
        font_family: String,
        /// Font size in points.
        font_size: f32,
        /// Fill color as hex.
        fill: String,
        /// Optional text background color as hex.
        background: Option<String>,
        /// Opacity (0.0 to 1.0).
        opacity: f32,
    },

    /// A decorative shape (not subject to print-quality checks).
    Shape {
        /// Fill color as hex.
        fill: String,
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
    },
}

/// Position and scale of an object on the canvas.
///
/// Displayed size is native size times scale; the scale pair is the
/// "scale multiplier" a host updates when the user drags a resize handle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placement {
    /// X position (pixels from canvas left).
    pub left: f64,
    /// Y position (pixels from canvas top).
    pub top: f64,
    /// Horizontal scale multiplier (1.0 = native size).
    pub scale_x: f64,
    /// Vertical scale multiplier (1.0 = native size).
    pub scale_y: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// A canvas object with content and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasObject {
    /// Unique identifier.
    pub id: ObjectId,
    /// Object content.
    pub kind: ObjectKind,
    /// Position and scale.
    pub placement: Placement,
}

impl CanvasObject {
    /// Create a new object with the given kind.
    #[must_use]
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            id: ObjectId::new(),
            kind,
            placement: Placement::default(),
        }
    }

    /// Set the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// The on-canvas size of this object after scaling, if it has an
    /// intrinsic size (images only).
    #[must_use]
    pub fn displayed_size(&self) -> Option<(f64, f64)> {
        match &self.kind {
            ObjectKind::Image {
                native_width,
                native_height,
                ..
            } => Some((
                native_width * self.placement.scale_x,
                native_height * self.placement.scale_y,
            )),
            _ => None,
        }
    }

    /// Uniformly scale an image so its displayed width equals `target`.
    ///
    /// Non-image objects are left unchanged.
    pub fn scale_to_width(&mut self, target: f64) {
        if let ObjectKind::Image { native_width, .. } = &self.kind {
            if *native_width > 0.0 {
                let scale = target / native_width;
                self.placement.scale_x = scale;
                self.placement.scale_y = scale;
            }
        }
    }

    /// Center this object within a canvas of the given size.
    pub fn center_in(&mut self, canvas_width: f64, canvas_height: f64) {
        if let Some((w, h)) = self.displayed_size() {
            self.placement.left = (canvas_width - w) / 2.0;
            self.placement.top = (canvas_height - h) / 2.0;
        } else {
            self.placement.left = canvas_width / 2.0;
            self.placement.top = canvas_height / 2.0;
        }
    }

    /// Whether this object is an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self.kind, ObjectKind::Image { .. })
    }

    /// Whether this object is text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ObjectKind::Text { .. })
    }
}
