//! Scene management for renderable objects.
//!
//! The scene is the render-side mirror of the scene store: one object per
//! shape record, plus the state every pass needs (selection, hover,
//! environment, gizmo).

mod bounds;
mod render_object;

pub use bounds::*;
pub use render_object::*;

use std::collections::HashMap;

use uuid::Uuid;

use crate::environment::Environment;
use crate::sub_renderers::{GizmoAxis, GizmoMode};

/// Transform gizmo state shared between the frontend and the gizmo pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct GizmoState {
    pub mode: GizmoMode,
    /// Axis currently under the pointer or being dragged.
    pub highlight: GizmoAxis,
    /// World-space size; updated each frame from the camera distance.
    pub scale: f32,
}

/// Scene containing all renderable objects.
pub struct Scene {
    objects: HashMap<Uuid, RenderObject>,
    selected: Option<Uuid>,
    hovered: Option<Uuid>,
    environment: Environment,
    gizmo: GizmoState,
    dirty: bool,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            selected: None,
            hovered: None,
            environment: Environment::default(),
            gizmo: GizmoState::default(),
            dirty: false,
        }
    }

    /// Returns true if the scene has been modified since last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the scene as clean (called after rendering).
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Inserts or replaces an object, keyed by its id.
    pub fn insert(&mut self, object: RenderObject) -> Uuid {
        let id = object.id;
        self.objects.insert(id, object);
        self.dirty = true;
        id
    }

    /// Gets an object by id.
    pub fn get(&self, id: Uuid) -> Option<&RenderObject> {
        self.objects.get(&id)
    }

    /// Gets a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut RenderObject> {
        self.dirty = true;
        self.objects.get_mut(&id)
    }

    /// Removes objects whose ids are not in the given set.
    pub fn retain_ids(&mut self, ids: &[Uuid]) {
        self.objects.retain(|id, _| ids.contains(id));
        if let Some(sel) = self.selected
            && !self.objects.contains_key(&sel)
        {
            self.selected = None;
        }
        if let Some(hov) = self.hovered
            && !self.objects.contains_key(&hov)
        {
            self.hovered = None;
        }
        self.dirty = true;
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns an iterator over all objects.
    pub fn objects(&self) -> impl Iterator<Item = &RenderObject> {
        self.objects.values()
    }

    /// Gets the currently selected object id.
    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// Sets the selected object, maintaining the per-object flags.
    pub fn set_selected(&mut self, id: Option<Uuid>) {
        if let Some(prev) = self.selected
            && let Some(obj) = self.objects.get_mut(&prev)
        {
            obj.selected = false;
        }

        self.selected = id;
        if let Some(new_id) = id
            && let Some(obj) = self.objects.get_mut(&new_id)
        {
            obj.selected = true;
        }

        self.dirty = true;
    }

    /// Gets the selected object.
    pub fn selected_object(&self) -> Option<&RenderObject> {
        self.selected.and_then(|id| self.objects.get(&id))
    }

    /// Gets the currently hovered object id.
    pub fn hovered(&self) -> Option<Uuid> {
        self.hovered
    }

    /// Sets the hovered object, maintaining the per-object flags.
    pub fn set_hovered(&mut self, id: Option<Uuid>) {
        if self.hovered == id {
            return;
        }
        if let Some(prev) = self.hovered
            && let Some(obj) = self.objects.get_mut(&prev)
        {
            obj.hovered = false;
        }

        self.hovered = id;
        if let Some(new_id) = id
            && let Some(obj) = self.objects.get_mut(&new_id)
        {
            obj.hovered = true;
        }

        self.dirty = true;
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
        self.dirty = true;
    }

    pub fn gizmo(&self) -> &GizmoState {
        &self.gizmo
    }

    pub fn gizmo_mut(&mut self) -> &mut GizmoState {
        &mut self.gizmo
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::MeshHandle;
    use glam::Vec3;

    fn test_object(id: Uuid) -> RenderObject {
        RenderObject::new(
            id,
            MeshHandle::default(),
            BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
        )
    }

    #[test]
    fn selection_flags_follow_selection() {
        let mut scene = Scene::new();
        let a = scene.insert(test_object(Uuid::new_v4()));
        let b = scene.insert(test_object(Uuid::new_v4()));

        scene.set_selected(Some(a));
        assert!(scene.get(a).unwrap().selected);
        assert!(!scene.get(b).unwrap().selected);

        scene.set_selected(Some(b));
        assert!(!scene.get(a).unwrap().selected);
        assert!(scene.get(b).unwrap().selected);

        scene.set_selected(None);
        assert!(!scene.get(b).unwrap().selected);
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn retain_drops_stale_selection() {
        let mut scene = Scene::new();
        let a = scene.insert(test_object(Uuid::new_v4()));
        let b = scene.insert(test_object(Uuid::new_v4()));
        scene.set_selected(Some(b));

        scene.retain_ids(&[a]);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn hover_moves_between_objects() {
        let mut scene = Scene::new();
        let a = scene.insert(test_object(Uuid::new_v4()));
        let b = scene.insert(test_object(Uuid::new_v4()));

        scene.set_hovered(Some(a));
        scene.set_hovered(Some(b));
        assert!(!scene.get(a).unwrap().hovered);
        assert!(scene.get(b).unwrap().hovered);
    }
}
