//! Widget Flow Integration Tests
//!
//! Tests the complete customization flow including:
//! - Upload -> thumbnail -> placement
//! - Stretching past the print threshold and the warning banner
//! - Product switching re-evaluating verdicts
//! - Context menu, swatches, and text panels following the scene

use std::cell::RefCell;
use std::rc::Rc;

use customizer_core::{
    CanvasEvent, ClipRect, ColorVariant, ImageFormat, ObjectKind, ProductCatalog, ProductFace,
};
use customizer_widget::{CustomizerController, FontFamily, MenuAction, UploadProgress};

/// A face with the given DPI requirement and two color variants.
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
        background_image: Some(format!("https://example.com/{name}-white.png")),
        overlay_image: None,
        thumbnail: Some(format!("https://example.com/{name}-thumb.png")),
        colors: vec![
            ColorVariant {
                name: "white".to_string(),
                background_image: Some(format!("https://example.com/{name}-white.png")),
                overlay_image: None,
                is_default: true,
            },
            ColorVariant {
                name: "dark-blue".to_string(),
                background_image: Some(format!("https://example.com/{name}-dark-blue.png")),
                overlay_image: None,
                is_default: false,
            },
        ],
        is_default,
    }
}

fn controller() -> CustomizerController {
    CustomizerController::new(
        750.0,
        600.0,
        ProductCatalog::new(vec![
            face("tshirt-front", 150.0, true),
            face("poster", 300.0, false),
        ]),
    )
}

// ============================================================================
// Upload to Placement
// ============================================================================

#[test]
fn upload_then_place_then_stretch_then_warn() {
    let mut c = controller();

    // Progress callbacks from the host's upload form.
    c.upload().begin();
    c.upload().advance(60);
    c.upload().succeed();
    assert_eq!(
        c.upload().progress(),
        UploadProgress::InFlight { percent: 100 }
    );
    c.upload().complete();
    assert_eq!(c.upload().progress(), UploadProgress::Idle);

    // Response lands in the thumbnail strip.
    let index = c
        .push_upload_response(r#"{"success":"https://example.com/uploads/crest.png"}"#)
        .expect("valid response");

    // Clicking the thumbnail places the image at native size.
    let id = c
        .place_uploaded(index, ImageFormat::Png, 300.0, 300.0)
        .expect("thumbnail exists");
    assert!(c.state().scene.get_object(id).expect("placed").is_image());
    assert!(!c.warning_visible());

    // Dragging a resize handle past native resolution raises the banner.
    c.set_object_scale(id, 1.4, 1.4).expect("placed");
    assert!(c.warning_visible());

    // Dragging back down hides it again.
    c.set_object_scale(id, 0.9, 0.9).expect("placed");
    assert!(!c.warning_visible());
}

#[test]
fn thumbnails_can_be_removed_from_the_strip() {
    let mut c = controller();
    c.push_upload_response(r#"{"success":"https://example.com/a.png"}"#);
    c.push_upload_response(r#"{"success":"https://example.com/b.png"}"#);

    c.remove_uploaded(0);
    assert_eq!(c.uploaded().images().len(), 1);
    assert_eq!(c.uploaded().images()[0].url, "https://example.com/b.png");
}

#[test]
fn menu_labels_can_be_localized() {
    let mut c = controller();
    c.set_menu_label(MenuAction::SendToBack, "Ganz nach hinten");
    let item = c
        .menu()
        .items
        .iter()
        .find(|i| i.action == MenuAction::SendToBack)
        .expect("menu item");
    assert_eq!(item.label, "Ganz nach hinten");
}

#[test]
fn malformed_upload_responses_leave_the_widget_unchanged() {
    let mut c = controller();
    assert!(c.push_upload_response("<html>oops</html>").is_none());
    assert!(c.uploaded().images().is_empty());
    assert!(c.state().scene.is_empty());
}

#[test]
fn oversized_uploads_are_scaled_to_fit_on_placement() {
    let mut c = controller();
    let index = c
        .push_upload_response(r#"{"success":"https://example.com/uploads/banner.jpg"}"#)
        .expect("valid response");
    let id = c
        .place_uploaded(index, ImageFormat::Jpeg, 2000.0, 1000.0)
        .expect("thumbnail exists");

    let object = c.state().scene.get_object(id).expect("placed");
    let (w, _) = object.displayed_size().expect("image");
    assert!((w - 562.5).abs() < f64::EPSILON, "fit to 75% of 750px");
}

// ============================================================================
// Product Switching
// ============================================================================

#[test]
fn switching_products_flips_the_warning_and_rebuilds_swatches() {
    let mut c = controller();
    let id = c.add_image("https://example.com/a.png", ImageFormat::Png, 300.0, 300.0);
    c.set_object_scale(id, 1.5, 1.5).expect("placed");
    assert!(c.warning_visible());

    // Swatch selection carries per-face state.
    assert!(c.select_swatch("dark-blue").is_some());
    assert_eq!(
        c.swatches().active().map(|v| v.name.as_str()),
        Some("dark-blue")
    );

    // The poster face allows the same stretch; its swatch row resets.
    c.select_product(1).expect("face exists");
    assert!(!c.warning_visible());
    assert_eq!(c.swatches().active().map(|v| v.name.as_str()), Some("white"));

    // Nothing about the object itself moved.
    let object = c.state().scene.get_object(id).expect("placed");
    assert!((object.placement.scale_x - 1.5).abs() < f64::EPSILON);
}

#[test]
fn events_fire_after_each_mutation() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut c = controller();
    c.on_event(move |event| sink.borrow_mut().push(event.clone()));

    let id = c.add_image("https://example.com/a.png", ImageFormat::Png, 300.0, 300.0);
    c.set_object_scale(id, 2.0, 2.0).expect("placed");
    c.select_product(1).expect("face exists");

    let seen = events.borrow();
    assert!(seen.contains(&CanvasEvent::ObjectAdded { id }));
    assert!(seen.contains(&CanvasEvent::ObjectScaled { id }));
    assert!(seen.contains(&CanvasEvent::WarningChanged { visible: true }));
    assert!(seen.contains(&CanvasEvent::ProductChanged { face_index: 1 }));
    // Poster face tolerates the stretch, so the banner went down again.
    assert!(seen.contains(&CanvasEvent::WarningChanged { visible: false }));
}

// ============================================================================
// Text Objects and Menus
// ============================================================================

#[test]
fn text_lifecycle_with_panels_and_styling() {
    let mut c = controller();
    let id = c.add_text("Sample Text");
    assert_eq!(c.text_panels().active(), Some(id));

    c.set_text_content(id, "GO TEAM").expect("is text");
    c.set_font_family(id, FontFamily::Arial).expect("is text");
    c.set_text_fill(id, "#96004B", 0.8).expect("is text");

    match &c.state().scene.get_object(id).expect("placed").kind {
        ObjectKind::Text {
            content,
            font_family,
            fill,
            ..
        } => {
            assert_eq!(content, "GO TEAM");
            assert_eq!(font_family, "Arial");
            assert_eq!(fill, "#96004B");
        }
        _ => panic!("expected text"),
    }

    // Escape removes the object and its panel together.
    assert_eq!(c.remove_active(), Some(id));
    assert!(c.text_panels().panels().is_empty());
}

#[test]
fn context_menu_reorders_layers() {
    let mut c = controller();
    let logo = c.add_image("https://example.com/logo.png", ImageFormat::Png, 100.0, 100.0);
    let caption = c.add_text("caption");

    // The text was just added, so it is active and on top.
    c.apply_menu_action(MenuAction::SendToBack).expect("selected");
    let order: Vec<_> = c.state().scene.objects().map(|o| o.id).collect();
    assert_eq!(order, vec![caption, logo]);

    c.deselect();
    assert!(!c.menu_should_show());
    assert!(c.apply_menu_action(MenuAction::BringForward).is_err());
}
