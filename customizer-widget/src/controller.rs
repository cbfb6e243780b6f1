//! The widget controller - host events in, scene mutations and notifications out.

use customizer_core::{
    CanvasEvent, CanvasObject, ColorVariant, CustomizeError, CustomizeResult, CustomizerState,
    ImageFormat, ObjectId, ObjectKind, Placement, ProductCatalog,
};

use crate::menu::{ContextMenu, MenuAction};
use crate::swatches::SwatchList;
use crate::text_controls::{FontFamily, TextPanels, DEFAULT_FONT_SIZE};
use crate::upload::{UploadTracker, UploadedImageList};

/// Fraction of the canvas width a freshly placed image may occupy before
/// it is scaled down to fit.
const FIT_RATIO: f64 = 0.75;

/// Callback invoked after each completed mutation.
pub type EventListener = Box<dyn FnMut(&CanvasEvent)>;

/// Mutable view of a text object's style fields.
struct TextStyle<'a> {
    content: &'a mut String,
    font_family: &'a mut String,
    font_size: &'a mut f32,
    fill: &'a mut String,
    background: &'a mut Option<String>,
    opacity: &'a mut f32,
}

/// Drives the customizer from host UI events.
///
/// Owns the core state plus the per-control UI state (context menu, swatch
/// row, text panels, upload list). Hosts register listeners to mirror
/// mutations into the DOM; every listener runs after the mutation completes.
pub struct CustomizerController {
    state: CustomizerState,
    menu: ContextMenu,
    swatches: SwatchList,
    text_panels: TextPanels,
    upload: UploadTracker,
    uploaded: UploadedImageList,
    listeners: Vec<EventListener>,
    warning_visible: bool,
}

impl CustomizerController {
    /// Create a controller for the given canvas size and catalog.
    #[must_use]
    pub fn new(width: f64, height: f64, catalog: ProductCatalog) -> Self {
        let state = CustomizerState::new(width, height, catalog);
        let swatches = state
            .current_face()
            .map(SwatchList::for_face)
            .unwrap_or_default();
        tracing::debug!(
            "Controller created with {} product faces",
            state.catalog.len()
        );

        Self {
            state,
            menu: ContextMenu::new(),
            swatches,
            text_panels: TextPanels::default(),
            upload: UploadTracker::new(),
            uploaded: UploadedImageList::default(),
            listeners: Vec::new(),
            warning_visible: false,
        }
    }

    /// Register a listener invoked after every completed mutation.
    pub fn on_event(&mut self, listener: impl FnMut(&CanvasEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: CanvasEvent) {
        tracing::debug!("Canvas event: {event:?}");
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Re-evaluate the under-resolution warning against the current face.
    ///
    /// Emits [`CanvasEvent::WarningChanged`] only when visibility flips, so
    /// redundant checks leave an already-shown banner alone.
    fn refresh_warning(&mut self) {
        let visible = self.state.has_underscaled_images();
        if visible != self.warning_visible {
            self.warning_visible = visible;
            self.emit(CanvasEvent::WarningChanged { visible });
        }
    }

    /// Place an image on the canvas.
    ///
    /// Images wider than three quarters of the canvas are scaled down to
    /// that width and centered, then the print-quality warning is
    /// re-evaluated.
    pub fn add_image(
        &mut self,
        src: impl Into<String>,
        format: ImageFormat,
        native_width: f64,
        native_height: f64,
    ) -> ObjectId {
        let mut object = CanvasObject::new(ObjectKind::Image {
            src: src.into(),
            format,
            native_width,
            native_height,
        });

        let limit = self.state.scene.width * FIT_RATIO;
        let scaled = native_width > limit;
        if scaled {
            object.scale_to_width(limit);
            object.center_in(self.state.scene.width, self.state.scene.height);
        }

        let id = self.state.scene.add_object(object);
        self.emit(CanvasEvent::ObjectAdded { id });
        if scaled {
            self.emit(CanvasEvent::ObjectScaled { id });
        }
        self.refresh_warning();
        id
    }

    /// Place a thumbnail from the uploaded-image list onto the canvas.
    ///
    /// The host supplies the native pixel size it measured after loading
    /// the image. Returns `None` for an out-of-range index.
    pub fn place_uploaded(
        &mut self,
        index: usize,
        format: ImageFormat,
        native_width: f64,
        native_height: f64,
    ) -> Option<ObjectId> {
        let url = self.uploaded.images().get(index)?.url.clone();
        Some(self.add_image(url, format, native_width, native_height))
    }

    /// Add a text object at the canvas center and select it.
    pub fn add_text(&mut self, content: impl Into<String>) -> ObjectId {
        let placement = Placement {
            left: self.state.scene.width / 2.0,
            top: self.state.scene.height / 2.0,
            scale_x: 1.0,
            scale_y: 1.0,
        };
        let object = CanvasObject::new(ObjectKind::Text {
            content: content.into(),
            font_family: FontFamily::default().name().to_string(),
            font_size: DEFAULT_FONT_SIZE,
            fill: "#000000".to_string(),
            background: None,
            opacity: 1.0,
        })
        .with_placement(placement);

        let id = self.state.scene.add_object(object);
        self.text_panels.add(id);
        self.emit(CanvasEvent::ObjectAdded { id });

        if self.state.scene.set_active(id).is_ok() {
            self.emit(CanvasEvent::SelectionChanged { id: Some(id) });
        }
        id
    }

    /// Make an object the active selection.
    ///
    /// Text objects also get their controls panel expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the scene.
    pub fn select_object(&mut self, id: ObjectId) -> CustomizeResult<()> {
        self.state.scene.set_active(id)?;
        if self
            .state
            .scene
            .get_object(id)
            .is_some_and(CanvasObject::is_text)
        {
            self.text_panels.activate(id);
        }
        self.emit(CanvasEvent::SelectionChanged { id: Some(id) });
        Ok(())
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        if self.state.scene.active().is_some() {
            self.state.scene.deselect();
            self.emit(CanvasEvent::SelectionChanged { id: None });
        }
    }

    /// Remove the active object (the Escape-key behavior).
    ///
    /// Text objects take their controls panel with them. Returns the
    /// removed object's ID, or `None` when nothing was selected.
    pub fn remove_active(&mut self) -> Option<ObjectId> {
        let id = self.state.scene.active()?;
        let was_text = self
            .state
            .scene
            .get_object(id)
            .is_some_and(CanvasObject::is_text);

        self.state.scene.remove_object(id).ok()?;
        if was_text {
            self.text_panels.remove(id);
        }
        self.emit(CanvasEvent::ObjectRemoved { id });
        self.emit(CanvasEvent::SelectionChanged { id: None });
        Some(id)
    }

    /// Apply a scale change reported by the canvas resize handles.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not in the scene.
    pub fn set_object_scale(
        &mut self,
        id: ObjectId,
        scale_x: f64,
        scale_y: f64,
    ) -> CustomizeResult<()> {
        let object = self
            .state
            .scene
            .get_object_mut(id)
            .ok_or_else(|| CustomizeError::ObjectNotFound(id.to_string()))?;
        object.placement.scale_x = scale_x;
        object.placement.scale_y = scale_y;

        self.emit(CanvasEvent::ObjectScaled { id });
        self.refresh_warning();
        Ok(())
    }

    /// Switch to another product face and rebuild the swatch row.
    ///
    /// Re-evaluates the warning against the new face without touching any
    /// placed object.
    ///
    /// # Errors
    ///
    /// Returns an error if the face index is out of range.
    pub fn select_product(&mut self, index: usize) -> CustomizeResult<()> {
        self.state.select_face(index)?;
        self.swatches = self
            .state
            .current_face()
            .map(SwatchList::for_face)
            .unwrap_or_default();
        self.emit(CanvasEvent::ProductChanged { face_index: index });
        self.refresh_warning();
        Ok(())
    }

    /// Select a color swatch, returning the variant whose mockup imagery
    /// the host should apply. Unknown names change nothing.
    pub fn select_swatch(&mut self, name: &str) -> Option<ColorVariant> {
        self.swatches.select(name).cloned()
    }

    /// Apply a context-menu ordering action to the active object.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected.
    pub fn apply_menu_action(&mut self, action: MenuAction) -> CustomizeResult<()> {
        let id = self
            .state
            .scene
            .active()
            .ok_or_else(|| CustomizeError::InvalidOperation("no active object".to_string()))?;
        ContextMenu::apply(action, &mut self.state.scene)?;
        self.emit(CanvasEvent::OrderChanged { id });
        Ok(())
    }

    /// Update a text object's content (the textarea keyup handler).
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or not text.
    pub fn set_text_content(&mut self, id: ObjectId, new_content: &str) -> CustomizeResult<()> {
        self.with_text(id, |style| {
            *style.content = new_content.to_string();
        })
    }

    /// Change a text object's font family.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or not text.
    pub fn set_font_family(&mut self, id: ObjectId, family: FontFamily) -> CustomizeResult<()> {
        self.with_text(id, |style| {
            *style.font_family = family.name().to_string();
        })
    }

    /// Change a text object's font size.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or not text.
    pub fn set_font_size(&mut self, id: ObjectId, size: f32) -> CustomizeResult<()> {
        self.with_text(id, |style| {
            *style.font_size = size;
        })
    }

    /// Set a text object's fill color and opacity (the foreground picker).
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or not text.
    pub fn set_text_fill(
        &mut self,
        id: ObjectId,
        hex: &str,
        new_opacity: f32,
    ) -> CustomizeResult<()> {
        self.with_text(id, |style| {
            *style.fill = hex.to_string();
            *style.opacity = new_opacity;
        })
    }

    /// Set a text object's background color and opacity (the background
    /// picker).
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing or not text.
    pub fn set_text_background(
        &mut self,
        id: ObjectId,
        hex: &str,
        new_opacity: f32,
    ) -> CustomizeResult<()> {
        self.with_text(id, |style| {
            *style.background = Some(hex.to_string());
            *style.opacity = new_opacity;
        })
    }

    fn with_text(
        &mut self,
        id: ObjectId,
        apply: impl FnOnce(TextStyle<'_>),
    ) -> CustomizeResult<()> {
        let object = self
            .state
            .scene
            .get_object_mut(id)
            .ok_or_else(|| CustomizeError::ObjectNotFound(id.to_string()))?;
        match &mut object.kind {
            ObjectKind::Text {
                content,
                font_family,
                font_size,
                fill,
                background,
                opacity,
            } => {
                apply(TextStyle {
                    content,
                    font_family,
                    font_size,
                    fill,
                    background,
                    opacity,
                });
                Ok(())
            }
            _ => Err(CustomizeError::InvalidOperation(format!(
                "object {id} is not text"
            ))),
        }
    }

    /// The core state (scene, catalog, current face).
    #[must_use]
    pub fn state(&self) -> &CustomizerState {
        &self.state
    }

    /// The context-menu descriptor.
    #[must_use]
    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Override a context-menu label (host-supplied translations).
    pub fn set_menu_label(&mut self, action: MenuAction, label: impl Into<String>) {
        self.menu.set_label(action, label);
    }

    /// Whether the context menu may open right now.
    #[must_use]
    pub fn menu_should_show(&self) -> bool {
        ContextMenu::should_show(&self.state.scene)
    }

    /// The swatch row for the current face.
    #[must_use]
    pub fn swatches(&self) -> &SwatchList {
        &self.swatches
    }

    /// The text-object control panels.
    #[must_use]
    pub fn text_panels(&self) -> &TextPanels {
        &self.text_panels
    }

    /// The upload progress tracker.
    pub fn upload(&mut self) -> &mut UploadTracker {
        &mut self.upload
    }

    /// Feed an upload response body into the thumbnail list.
    ///
    /// Malformed bodies are swallowed and return `None`.
    pub fn push_upload_response(&mut self, body: &str) -> Option<usize> {
        self.uploaded.push_response(body)?;
        Some(self.uploaded.images().len() - 1)
    }

    /// The uploaded-image thumbnail list.
    #[must_use]
    pub fn uploaded(&self) -> &UploadedImageList {
        &self.uploaded
    }

    /// Remove an uploaded thumbnail by position.
    pub fn remove_uploaded(&mut self, index: usize) {
        let _ = self.uploaded.remove(index);
    }

    /// Whether the under-resolution warning banner is showing.
    #[must_use]
    pub fn warning_visible(&self) -> bool {
        self.warning_visible
    }
}
