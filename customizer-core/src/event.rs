//! Notifications emitted after scene and product mutations.
//!
//! Hosts subscribe to these through the widget controller; every event is
//! dispatched after the triggering mutation has completed, so a listener
//! always observes the post-mutation state.

use serde::{Deserialize, Serialize};

use crate::ObjectId;

/// A notification about a completed canvas mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CanvasEvent {
    /// An object was added to the scene.
    ObjectAdded {
        /// The added object.
        id: ObjectId,
    },

    /// An object was removed from the scene.
    ObjectRemoved {
        /// The removed object.
        id: ObjectId,
    },

    /// An object's scale multiplier changed.
    ObjectScaled {
        /// The rescaled object.
        id: ObjectId,
    },

    /// The active (selected) object changed.
    SelectionChanged {
        /// The newly active object, or `None` if the selection was cleared.
        id: Option<ObjectId>,
    },

    /// An object's position in the draw order changed.
    OrderChanged {
        /// The reordered object.
        id: ObjectId,
    },

    /// The current product face was replaced.
    ProductChanged {
        /// Index of the newly selected face.
        face_index: usize,
    },

    /// The under-resolution warning changed visibility.
    WarningChanged {
        /// Whether the warning banner should now be shown.
        visible: bool,
    },
}
