//! # Customizer Core
//!
//! Core model for a browser-based product customization widget.
//! Compiles to WASM so the same logic runs in the page that hosts the canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             customizer-core.wasm            │
//! ├─────────────────────────────────────────────┤
//! │  Scene Graph     │  Product Catalog         │
//! │  - Objects       │  - Faces & DPI           │
//! │  - Draw order    │  - Clip regions          │
//! │  - Selection     │  - Color variants        │
//! ├─────────────────────────────────────────────┤
//! │  Resolution Checker                         │
//! │  - Per-image print-DPI verdicts             │
//! │  - Aggregate under-resolution warning       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Rendering, DOM wiring, and the upload transport live in the host; this
//! crate owns the scene, the product selection, and the print-quality rules.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod event;
pub mod object;
pub mod product;
pub mod resolution;
pub mod scene;
pub mod state;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{CustomizeError, CustomizeResult};
pub use event::CanvasEvent;
pub use object::{CanvasObject, ImageFormat, ObjectId, ObjectKind, Placement};
pub use product::{swatch_hex, ClipRect, ColorVariant, ProductCatalog, ProductFace, SWATCH_HEX};
pub use resolution::{
    expected_height, expected_width, has_underscaled_images, is_below_min_dpi, REFERENCE_DPI,
};
pub use scene::Scene;
pub use state::CustomizerState;

/// Customizer core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
