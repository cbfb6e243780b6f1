//! Widget state - the scene plus the product selection it prints onto.

use serde::{Deserialize, Serialize};

use crate::{resolution, CustomizeError, CustomizeResult, ProductCatalog, ProductFace, Scene};

/// The complete customizer state.
///
/// Bundles the scene with the product catalog and the index of the current
/// face, so print-quality checks always read the face that is selected at
/// call time rather than one captured when an image was placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizerState {
    /// The design scene.
    pub scene: Scene,
    /// The product faces on offer.
    pub catalog: ProductCatalog,
    /// Index of the currently selected face.
    current_face: usize,
}

impl CustomizerState {
    /// Create a state for the given canvas size and catalog.
    ///
    /// The catalog's default face starts selected.
    #[must_use]
    pub fn new(width: f64, height: f64, catalog: ProductCatalog) -> Self {
        let current_face = catalog.default_face_index();
        Self {
            scene: Scene::new(width, height),
            catalog,
            current_face,
        }
    }

    /// The currently selected product face, if the catalog has any.
    #[must_use]
    pub fn current_face(&self) -> Option<&ProductFace> {
        self.catalog.face(self.current_face)
    }

    /// Index of the currently selected face.
    #[must_use]
    pub fn current_face_index(&self) -> usize {
        self.current_face
    }

    /// Replace the current face with another from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CustomizeError::UnknownFace`] if the index is out of range.
    pub fn select_face(&mut self, index: usize) -> CustomizeResult<()> {
        if index >= self.catalog.len() {
            return Err(CustomizeError::UnknownFace(index));
        }
        self.current_face = index;
        tracing::debug!("Selected product face {index}");
        Ok(())
    }

    /// Whether any placed image falls below the current face's print DPI.
    ///
    /// Evaluates against whichever face is selected now; a face with no DPI
    /// requirement (an empty catalog) never warns.
    #[must_use]
    pub fn has_underscaled_images(&self) -> bool {
        match self.current_face() {
            Some(face) => resolution::has_underscaled_images(self.scene.objects(), face.required_dpi),
            None => false,
        }
    }
}
