//! Color swatch row for the current product face.

use serde::Serialize;

use customizer_core::{ColorVariant, ProductFace};

/// One clickable swatch.
#[derive(Debug, Clone, Serialize)]
pub struct Swatch {
    /// Color variant behind this swatch.
    pub variant: ColorVariant,
    /// Hex value to paint the swatch with, if the name is known.
    pub hex: Option<&'static str>,
    /// Whether this swatch is the current selection.
    pub active: bool,
}

/// The style-and-color row rebuilt on every product switch.
///
/// Exactly one swatch is active at a time; selecting one yields the variant
/// whose mockup imagery the host should apply to the canvas.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SwatchList {
    swatches: Vec<Swatch>,
}

impl SwatchList {
    /// Build the swatch row for a face, activating its default variant.
    #[must_use]
    pub fn for_face(face: &ProductFace) -> Self {
        let default_name = face.default_variant().map(|v| v.name.clone());
        let swatches = face
            .colors
            .iter()
            .map(|variant| Swatch {
                hex: variant.hex(),
                active: Some(&variant.name) == default_name.as_ref(),
                variant: variant.clone(),
            })
            .collect();
        Self { swatches }
    }

    /// Select a swatch by color name, deactivating the rest.
    ///
    /// Returns the selected variant so the host can swap the mockup
    /// background and overlay. Unknown names leave the row unchanged.
    pub fn select(&mut self, name: &str) -> Option<&ColorVariant> {
        let pos = self.swatches.iter().position(|s| s.variant.name == name)?;
        for (i, swatch) in self.swatches.iter_mut().enumerate() {
            swatch.active = i == pos;
        }
        self.swatches.get(pos).map(|s| &s.variant)
    }

    /// The active swatch's variant, if any swatches exist.
    #[must_use]
    pub fn active(&self) -> Option<&ColorVariant> {
        self.swatches.iter().find(|s| s.active).map(|s| &s.variant)
    }

    /// All swatches in display order.
    #[must_use]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }
}
