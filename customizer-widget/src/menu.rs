//! Declarative context-menu descriptor for the canvas container.
//!
//! The host's menu widget renders whatever this descriptor says; the
//! customizer only decides the items, their icons, when the menu may show,
//! and what each click does to the scene.

use serde::Serialize;

use customizer_core::{CustomizeError, CustomizeResult, Scene};

/// The four layer-ordering actions offered on right-click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuAction {
    /// Move the active object one step down the draw stack.
    SendBackwards,
    /// Move the active object to the bottom of the draw stack.
    SendToBack,
    /// Move the active object one step up the draw stack.
    BringForward,
    /// Move the active object to the top of the draw stack.
    BringToFront,
}

impl MenuAction {
    /// Default menu label for this action.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Self::SendBackwards => "Send to backward",
            Self::SendToBack => "Send to back",
            Self::BringForward => "Bring forward",
            Self::BringToFront => "Bring to front",
        }
    }

    /// Icon name the host should render next to the label.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::SendBackwards => "glyphicon-step-backward",
            Self::SendToBack => "glyphicon-fast-backward",
            Self::BringForward => "glyphicon-step-forward",
            Self::BringToFront => "glyphicon-fast-forward",
        }
    }
}

/// One renderable menu entry.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    /// The action this entry triggers.
    pub action: MenuAction,
    /// Label text.
    pub label: String,
    /// Icon name.
    pub icon: &'static str,
}

/// The context menu bound to the canvas container.
#[derive(Debug, Clone, Serialize)]
pub struct ContextMenu {
    /// Menu entries in display order.
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Build the menu with default labels.
    #[must_use]
    pub fn new() -> Self {
        let items = [
            MenuAction::SendBackwards,
            MenuAction::SendToBack,
            MenuAction::BringForward,
            MenuAction::BringToFront,
        ]
        .into_iter()
        .map(|action| MenuItem {
            action,
            label: action.default_label().to_string(),
            icon: action.icon(),
        })
        .collect();
        Self { items }
    }

    /// Override the label for one action (host-supplied translations).
    pub fn set_label(&mut self, action: MenuAction, label: impl Into<String>) {
        if let Some(item) = self.items.iter_mut().find(|i| i.action == action) {
            item.label = label.into();
        }
    }

    /// Show-guard: the menu only opens when an object is selected.
    #[must_use]
    pub fn should_show(scene: &Scene) -> bool {
        scene.active_object().is_some()
    }

    /// Apply an action to the scene's active object.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected or the object has vanished.
    pub fn apply(action: MenuAction, scene: &mut Scene) -> CustomizeResult<()> {
        let id = scene
            .active()
            .ok_or_else(|| CustomizeError::InvalidOperation("no active object".to_string()))?;
        match action {
            MenuAction::SendBackwards => scene.send_backwards(id),
            MenuAction::SendToBack => scene.send_to_back(id),
            MenuAction::BringForward => scene.bring_forward(id),
            MenuAction::BringToFront => scene.bring_to_front(id),
        }
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}
