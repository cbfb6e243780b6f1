//! Scene graph for the design canvas.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CanvasObject, CustomizeError, CustomizeResult, ObjectId};

/// A scene containing all placed design objects.
///
/// Objects render in draw-stack order, bottom first. The ordering
/// operations (`bring_forward` and friends) work on that stack rather than
/// on z-index values, matching how a layered canvas host composites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// All objects in the scene, indexed by ID.
    objects: HashMap<ObjectId, CanvasObject>,
    /// Draw order, bottom to top.
    order: Vec<ObjectId>,
    /// The active (selected) object, if any.
    active: Option<ObjectId>,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl Scene {
    /// Create a new empty scene with the given canvas size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            objects: HashMap::new(),
            order: Vec::new(),
            active: None,
            width,
            height,
        }
    }

    /// Add an object on top of the draw stack.
    pub fn add_object(&mut self, object: CanvasObject) -> ObjectId {
        let id = object.id;
        self.order.push(id);
        self.objects.insert(id, object);
        id
    }

    /// Remove an object from the scene.
    ///
    /// Clears the selection if the removed object was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not found.
    pub fn remove_object(&mut self, id: ObjectId) -> CustomizeResult<CanvasObject> {
        self.order.retain(|&oid| oid != id);
        if self.active == Some(id) {
            self.active = None;
        }
        self.objects
            .remove(&id)
            .ok_or_else(|| CustomizeError::ObjectNotFound(id.to_string()))
    }

    /// Get an object by ID.
    #[must_use]
    pub fn get_object(&self, id: ObjectId) -> Option<&CanvasObject> {
        self.objects.get(&id)
    }

    /// Get a mutable reference to an object by ID.
    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut CanvasObject> {
        self.objects.get_mut(&id)
    }

    /// Iterate over all objects in draw order, bottom to top.
    pub fn objects(&self) -> impl Iterator<Item = &CanvasObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Make an object the active selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not found.
    pub fn set_active(&mut self, id: ObjectId) -> CustomizeResult<()> {
        if self.objects.contains_key(&id) {
            self.active = Some(id);
            Ok(())
        } else {
            Err(CustomizeError::ObjectNotFound(id.to_string()))
        }
    }

    /// The active object's ID, if any.
    #[must_use]
    pub fn active(&self) -> Option<ObjectId> {
        self.active
    }

    /// The active object, if any.
    #[must_use]
    pub fn active_object(&self) -> Option<&CanvasObject> {
        self.active.and_then(|id| self.objects.get(&id))
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.active = None;
    }

    /// Move an object one step up the draw stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not found.
    pub fn bring_forward(&mut self, id: ObjectId) -> CustomizeResult<()> {
        let pos = self.stack_position(id)?;
        if pos + 1 < self.order.len() {
            self.order.swap(pos, pos + 1);
        }
        Ok(())
    }

    /// Move an object one step down the draw stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not found.
    pub fn send_backwards(&mut self, id: ObjectId) -> CustomizeResult<()> {
        let pos = self.stack_position(id)?;
        if pos > 0 {
            self.order.swap(pos, pos - 1);
        }
        Ok(())
    }

    /// Move an object to the top of the draw stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not found.
    pub fn bring_to_front(&mut self, id: ObjectId) -> CustomizeResult<()> {
        let pos = self.stack_position(id)?;
        let id = self.order.remove(pos);
        self.order.push(id);
        Ok(())
    }

    /// Move an object to the bottom of the draw stack.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is not found.
    pub fn send_to_back(&mut self, id: ObjectId) -> CustomizeResult<()> {
        let pos = self.stack_position(id)?;
        let id = self.order.remove(pos);
        self.order.insert(0, id);
        Ok(())
    }

    fn stack_position(&self, id: ObjectId) -> CustomizeResult<usize> {
        self.order
            .iter()
            .position(|&oid| oid == id)
            .ok_or_else(|| CustomizeError::ObjectNotFound(id.to_string()))
    }

    /// Get the number of objects in the scene.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CustomizeResult<String> {
        serde_json::to_string(self).map_err(CustomizeError::Serialization)
    }

    /// Deserialize a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CustomizeResult<Self> {
        serde_json::from_str(json).map_err(CustomizeError::Serialization)
    }
}
