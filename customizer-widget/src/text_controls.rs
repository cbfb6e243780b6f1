//! Per-text-object style controls.
//!
//! Every text object added to the canvas gets a controls panel (font family,
//! font size, fill and background color pickers). Exactly one panel is
//! expanded at a time, following the object the user last touched.

use serde::{Deserialize, Serialize};

use customizer_core::ObjectId;

/// Font families offered by the family dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Arial.
    Arial,
    /// Helvetica (the default).
    #[default]
    Helvetica,
    /// Verdana.
    Verdana,
}

impl FontFamily {
    /// CSS font-family name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Helvetica => "Helvetica",
            Self::Verdana => "Verdana",
        }
    }

    /// All offered families, in dropdown order.
    #[must_use]
    pub fn all() -> &'static [FontFamily] {
        &[Self::Arial, Self::Helvetica, Self::Verdana]
    }
}

/// Font sizes offered by the size dropdown, in points.
pub const FONT_SIZES: &[f32] = &[
    6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 14.0, 18.0, 24.0, 30.0, 36.0, 48.0, 60.0, 72.0, 96.0,
];

/// Font size a new text object starts with.
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// One controls panel bound to a text object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPanel {
    /// The text object this panel styles.
    pub object: ObjectId,
    /// Whether this panel is currently expanded.
    pub active: bool,
}

/// The list of text-object control panels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextPanels {
    panels: Vec<TextPanel>,
}

impl TextPanels {
    /// Add a panel for a newly created text object and expand it.
    pub fn add(&mut self, object: ObjectId) {
        for panel in &mut self.panels {
            panel.active = false;
        }
        self.panels.push(TextPanel {
            object,
            active: true,
        });
    }

    /// Expand the panel for the given object, collapsing the rest.
    ///
    /// Objects without a panel are ignored.
    pub fn activate(&mut self, object: ObjectId) {
        if !self.panels.iter().any(|p| p.object == object) {
            return;
        }
        for panel in &mut self.panels {
            panel.active = panel.object == object;
        }
    }

    /// Remove the panel for an object (when the object is deleted).
    ///
    /// Returns whether a panel existed.
    pub fn remove(&mut self, object: ObjectId) -> bool {
        let before = self.panels.len();
        self.panels.retain(|p| p.object != object);
        before != self.panels.len()
    }

    /// The object whose panel is expanded, if any.
    #[must_use]
    pub fn active(&self) -> Option<ObjectId> {
        self.panels.iter().find(|p| p.active).map(|p| p.object)
    }

    /// All panels in creation order.
    #[must_use]
    pub fn panels(&self) -> &[TextPanel] {
        &self.panels
    }
}
