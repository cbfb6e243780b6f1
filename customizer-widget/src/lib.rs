//! # Customizer Widget
//!
//! UI orchestration state for the product customizer. The DOM, the canvas
//! renderer, and the upload transport belong to the host page; this crate
//! owns everything the host needs to drive them:
//!
//! - [`CustomizerController`] - scene mutations, product switching, the
//!   under-resolution warning, and listener dispatch
//! - [`menu::ContextMenu`] - the declarative right-click menu descriptor
//! - [`swatches::SwatchList`] - the style-and-color row for the current face
//! - [`text_controls`] - per-text-object style panels
//! - [`upload`] - progress tracking and the uploaded-thumbnail list
//!
//! Everything is synchronous and single-threaded: the host calls in from its
//! event handlers, and registered listeners fire after each mutation
//! completes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod controller;
pub mod menu;
pub mod swatches;
pub mod text_controls;
pub mod upload;

pub use controller::{CustomizerController, EventListener};
pub use menu::{ContextMenu, MenuAction, MenuItem};
pub use swatches::{Swatch, SwatchList};
pub use text_controls::{FontFamily, TextPanel, TextPanels, DEFAULT_FONT_SIZE, FONT_SIZES};
pub use upload::{
    parse_upload_response, UploadProgress, UploadTracker, UploadedImage, UploadedImageList,
};
