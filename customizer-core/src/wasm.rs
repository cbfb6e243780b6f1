//! WebAssembly bindings for customizer-core.
//!
//! This module provides JavaScript-callable functions when compiled to WASM.

use wasm_bindgen::prelude::*;

use crate::{CustomizerState, ProductCatalog, Scene};

/// Initialize the customizer WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Customizer instance for WASM.
#[wasm_bindgen]
pub struct WasmCustomizer {
    state: CustomizerState,
}

#[wasm_bindgen]
impl WasmCustomizer {
    /// Create a new customizer with an empty catalog.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: CustomizerState::new(width, height, ProductCatalog::default()),
        }
    }

    /// Load the product catalog from JSON, selecting its default face.
    ///
    /// # Errors
    ///
    /// Returns an error string if JSON parsing fails.
    #[wasm_bindgen(js_name = loadCatalog)]
    pub fn load_catalog(&mut self, json: &str) -> Result<(), String> {
        let catalog: ProductCatalog = serde_json::from_str(json).map_err(|e| e.to_string())?;
        self.state =
            CustomizerState::new(self.state.scene.width, self.state.scene.height, catalog);
        Ok(())
    }

    /// Get the current scene as JSON.
    #[wasm_bindgen(js_name = getSceneJson)]
    #[must_use]
    pub fn get_scene_json(&self) -> String {
        self.state.scene.to_json().unwrap_or_default()
    }

    /// Update the scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if JSON parsing fails.
    #[wasm_bindgen(js_name = updateSceneFromJson)]
    pub fn update_scene_from_json(&mut self, json: &str) -> Result<(), String> {
        self.state.scene = Scene::from_json(json).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Switch to another product face.
    ///
    /// # Errors
    ///
    /// Returns an error string if the index is out of range.
    #[wasm_bindgen(js_name = selectFace)]
    pub fn select_face(&mut self, index: usize) -> Result<(), String> {
        self.state.select_face(index).map_err(|e| e.to_string())
    }

    /// Index of the currently selected face.
    #[wasm_bindgen(js_name = currentFaceIndex)]
    #[must_use]
    pub fn current_face_index(&self) -> usize {
        self.state.current_face_index()
    }

    /// Whether any placed image is below the current face's print DPI.
    #[wasm_bindgen(js_name = hasUnderscaledImages)]
    #[must_use]
    pub fn has_underscaled_images(&self) -> bool {
        self.state.has_underscaled_images()
    }
}

impl Default for WasmCustomizer {
    fn default() -> Self {
        Self::new(750.0, 600.0)
    }
}
