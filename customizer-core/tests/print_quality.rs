//! Print Quality Integration Tests
//!
//! Tests the complete print-resolution flow including:
//! - Per-image DPI verdicts at and around the threshold
//! - Aggregate warnings over mixed scenes
//! - Product face switching changing verdicts without touching objects

use customizer_core::{
    has_underscaled_images, is_below_min_dpi, CanvasObject, ClipRect, CustomizerState,
    ImageFormat, ObjectKind, ProductCatalog, ProductFace, REFERENCE_DPI,
};

/// Create an image object displayed at the given on-canvas size.
fn image_at(native: (f64, f64), displayed: (f64, f64)) -> CanvasObject {
    let mut obj = CanvasObject::new(ObjectKind::Image {
        src: "https://example.com/upload.jpg".to_string(),
        format: ImageFormat::Jpeg,
        native_width: native.0,
        native_height: native.1,
    });
    obj.placement.scale_x = displayed.0 / native.0;
    obj.placement.scale_y = displayed.1 / native.1;
    obj
}

/// Create a text object (never subject to DPI checks).
fn text(content: &str) -> CanvasObject {
    CanvasObject::new(ObjectKind::Text {
        content: content.to_string(),
        font_family: "Verdana".to_string(),
        font_size: 18.0,
        fill: "#0B2345".to_string(),
        background: None,
        opacity: 1.0,
    })
}

/// Create a face with the given DPI requirement.
fn face(name: &str, dpi: f64, is_default: bool) -> ProductFace {
    ProductFace {
        name: name.to_string(),
        required_dpi: dpi,
        clip: ClipRect {
            x: 75.0,
            y: 50.0,
            width: 400.0,
            height: 450.0,
        },
        background_image: Some(format!("https://example.com/{name}-bg.png")),
        overlay_image: Some(format!("https://example.com/{name}-overlay.png")),
        thumbnail: None,
        colors: Vec::new(),
        is_default,
    }
}

// ============================================================================
// Per-Object Verdicts
// ============================================================================

#[test]
fn reference_dpi_is_the_150_baseline() {
    assert_eq!(REFERENCE_DPI, 150.0);
}

#[test]
fn verdict_matches_the_threshold_formula() {
    // True iff displayed height > H / 150 * D or displayed width > W / 150 * D.
    let cases: &[((f64, f64), (f64, f64), f64, bool)] = &[
        ((1500.0, 1500.0), (1500.0, 1500.0), 150.0, false),
        ((1500.0, 1500.0), (1500.0, 1501.0), 150.0, true),
        ((1500.0, 1500.0), (1501.0, 1500.0), 150.0, true),
        ((1500.0, 1500.0), (2000.0, 2000.0), 150.0, true),
        ((1500.0, 1500.0), (2000.0, 2000.0), 300.0, false),
        ((600.0, 400.0), (300.0, 200.0), 75.0, false),
        ((600.0, 400.0), (301.0, 200.0), 75.0, true),
    ];

    for &((w, h), (dw, dh), dpi, expected) in cases {
        let obj = image_at((w, h), (dw, dh));
        assert_eq!(
            is_below_min_dpi(&obj, dpi),
            expected,
            "native {w}x{h} displayed {dw}x{dh} at {dpi} DPI"
        );
    }
}

#[test]
fn non_image_objects_always_pass() {
    assert!(!is_below_min_dpi(&text("anything"), 9000.0));
}

// ============================================================================
// Aggregate Warning
// ============================================================================

#[test]
fn aggregate_is_false_for_an_empty_scene() {
    let objects: Vec<CanvasObject> = Vec::new();
    assert!(!has_underscaled_images(&objects, 150.0));
}

#[test]
fn aggregate_flags_one_bad_image_among_clean_objects() {
    let objects = vec![
        text("team name"),
        image_at((1500.0, 1500.0), (1500.0, 1500.0)),
        image_at((100.0, 100.0), (150.0, 150.0)),
    ];
    assert!(has_underscaled_images(&objects, 150.0));
}

#[test]
fn aggregate_is_false_when_every_image_is_within_bounds() {
    let objects = vec![
        text("team name"),
        image_at((1500.0, 1500.0), (1200.0, 1200.0)),
    ];
    assert!(!has_underscaled_images(&objects, 150.0));
}

// ============================================================================
// Product Face Switching
// ============================================================================

#[test]
fn switching_faces_changes_verdicts_without_touching_objects() {
    let catalog = ProductCatalog::new(vec![
        face("tshirt-front", 150.0, true),
        face("poster", 300.0, false),
    ]);
    let mut state = CustomizerState::new(750.0, 600.0, catalog);

    // Stretched past its native size: over at 150 DPI, fine at 300.
    state
        .scene
        .add_object(image_at((1500.0, 1500.0), (2000.0, 2000.0)));

    assert!(state.has_underscaled_images());

    state.select_face(1).expect("face exists");
    assert!(!state.has_underscaled_images());

    state.select_face(0).expect("face exists");
    assert!(state.has_underscaled_images());
}

#[test]
fn verdicts_use_the_face_selected_at_check_time() {
    let catalog = ProductCatalog::new(vec![
        face("generous", 600.0, true),
        face("strict", 150.0, false),
    ]);
    let mut state = CustomizerState::new(750.0, 600.0, catalog);

    // Placed while the generous face was current, so no warning then.
    let id = state
        .scene
        .add_object(image_at((1500.0, 1500.0), (2000.0, 2000.0)));

    assert!(!state.has_underscaled_images());

    // The later face switch alone must flip the verdict for the same object.
    state.select_face(1).expect("face exists");
    assert!(state.has_underscaled_images());
    assert!(state.scene.get_object(id).is_some());
}
