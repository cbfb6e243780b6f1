//! Print resolution checks for placed images.
//!
//! An uploaded image is scaled to fit the canvas against a fixed baseline of
//! [`REFERENCE_DPI`]. When the target face demands a higher print DPI, or the
//! user stretches the image past its native resolution, the printed result
//! degrades. These checks classify that condition so the host can warn the
//! user before a design is submitted.

use crate::{CanvasObject, ObjectKind};

/// DPI baseline used when an image is originally scaled to fit the canvas.
pub const REFERENCE_DPI: f64 = 150.0;

/// The largest on-canvas height this image supports at the face's DPI.
#[must_use]
pub fn expected_height(native_height: f64, required_dpi: f64) -> f64 {
    native_height / REFERENCE_DPI * required_dpi
}

/// The largest on-canvas width this image supports at the face's DPI.
#[must_use]
pub fn expected_width(native_width: f64, required_dpi: f64) -> f64 {
    native_width / REFERENCE_DPI * required_dpi
}

/// Whether an object is displayed below the minimum acceptable print
/// resolution for a face requiring `required_dpi`.
///
/// True iff the object is an image and its displayed height or width is
/// strictly greater than the size its native resolution supports. Sizes
/// exactly at the threshold pass. Non-image objects are never below minimum.
#[must_use]
pub fn is_below_min_dpi(object: &CanvasObject, required_dpi: f64) -> bool {
    match &object.kind {
        ObjectKind::Image {
            native_width,
            native_height,
            ..
        } => {
            let displayed_width = native_width * object.placement.scale_x;
            let displayed_height = native_height * object.placement.scale_y;

            displayed_height > expected_height(*native_height, required_dpi)
                || displayed_width > expected_width(*native_width, required_dpi)
        }
        _ => false,
    }
}

/// Whether any image in `objects` is displayed below the minimum print
/// resolution for a face requiring `required_dpi`.
///
/// Short-circuits on the first failing image; evaluation order is
/// unspecified. An empty set yields false.
#[must_use]
pub fn has_underscaled_images<'a>(
    objects: impl IntoIterator<Item = &'a CanvasObject>,
    required_dpi: f64,
) -> bool {
    objects
        .into_iter()
        .any(|object| is_below_min_dpi(object, required_dpi))
}
