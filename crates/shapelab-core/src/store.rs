//! Scene store: the shared shape list and selection.
//!
//! The store is the single source of truth for what has been placed and which
//! shape the gizmo is attached to. It is plain state owned by the application
//! and injected where needed; mutation happens on the UI thread only, inside
//! event handlers.

use uuid::Uuid;

use crate::shape::ShapeRecord;

/// Ordered shape list plus current selection.
///
/// Insertion order is preserved and equals render order. The selected id, when
/// set, refers to a shape currently in the list; callers (the pointer
/// handlers) guarantee this.
#[derive(Debug, Default)]
pub struct SceneStore {
    shapes: Vec<ShapeRecord>,
    selected: Option<Uuid>,
    dirty: bool,
}

impl SceneStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the store changed since the last sync to the renderer.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the store as synced.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Replaces the entire shape list. No validation is performed.
    pub fn set_shapes(&mut self, shapes: Vec<ShapeRecord>) {
        self.shapes = shapes;
        self.dirty = true;
    }

    /// Appends a record and returns its id.
    pub fn push(&mut self, record: ShapeRecord) -> Uuid {
        let id = record.id;
        self.shapes.push(record);
        self.dirty = true;
        id
    }

    /// Writes an updated record back at the given index.
    pub fn replace(&mut self, index: usize, record: ShapeRecord) {
        if let Some(slot) = self.shapes.get_mut(index) {
            *slot = record;
            self.dirty = true;
        }
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&ShapeRecord> {
        self.shapes.get(index)
    }

    /// Index of the record with the given id, if present.
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Replaces the selection. `None` clears it (background interaction).
    pub fn set_selected(&mut self, id: Option<Uuid>) {
        self.selected = id;
        self.dirty = true;
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// The selected shape's record, if any.
    pub fn selected_record(&self) -> Option<&ShapeRecord> {
        self.selected
            .and_then(|id| self.shapes.iter().find(|s| s.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShapeParams;
    use crate::shape::{GeometryKind, LightKind};
    use glam::Vec3;

    #[test]
    fn push_preserves_count_and_order() {
        let params = ShapeParams::default();
        let mut store = SceneStore::new();

        let ids: Vec<Uuid> = (0..5).map(|_| store.push(params.make_record())).collect();

        assert_eq!(store.len(), 5);
        let stored: Vec<Uuid> = store.shapes().iter().map(|s| s.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn add_sphere_yields_exact_record() {
        let params = ShapeParams {
            kind: GeometryKind::Sphere,
            color: [0.0, 1.0, 0.0],
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let mut store = SceneStore::new();
        store.push(params.make_record());

        assert_eq!(store.len(), 1);
        let record = store.get(0).unwrap();
        assert_eq!(record.kind, GeometryKind::Sphere);
        assert_eq!(record.color, [0.0, 1.0, 0.0]);
        assert_eq!(record.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(record.lights.len(), 3);
        assert_eq!(record.lights[0].kind(), LightKind::Ambient);
        assert_eq!(record.lights[1].kind(), LightKind::Spot);
        assert_eq!(record.lights[2].kind(), LightKind::Point);
    }

    #[test]
    fn selecting_one_shape_leaves_others_untouched() {
        let params = ShapeParams::default();
        let mut store = SceneStore::new();
        let a = store.push(params.make_record());
        let b = store.push(params.make_record());

        let before: Vec<_> = store.shapes().to_vec();
        store.set_selected(Some(b));

        assert_eq!(store.selected(), Some(b));
        assert_eq!(store.shapes(), &before[..]);
        assert_ne!(store.selected(), Some(a));
    }

    #[test]
    fn background_click_clears_selection() {
        let params = ShapeParams::default();
        let mut store = SceneStore::new();
        let id = store.push(params.make_record());
        store.set_selected(Some(id));

        store.set_selected(None);
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn reclick_restyles_from_current_panel() {
        let mut params = ShapeParams::default();
        let mut store = SceneStore::new();
        let id = store.push(params.make_record());

        // The user edits the panel, then clicks the placed shape again.
        params.color = [0.0, 0.0, 1.0];
        params.roughness = 0.5;

        let index = store.index_of(id).unwrap();
        let mut record = store.get(index).unwrap().clone();
        let placed_at = record.position;
        params.restyle(&mut record);
        store.replace(index, record);
        store.set_selected(Some(id));

        let record = store.get(index).unwrap();
        assert_eq!(record.color, [0.0, 0.0, 1.0]);
        assert_eq!(record.roughness, 0.5);
        assert_eq!(record.position, placed_at);
        assert_eq!(record.kind, GeometryKind::Box);
    }

    #[test]
    fn unknown_kind_name_does_not_parse() {
        assert_eq!(GeometryKind::parse("torus"), None);
        assert_eq!(GeometryKind::parse("sphere"), Some(GeometryKind::Sphere));
    }

    #[test]
    fn dirty_tracking() {
        let mut store = SceneStore::new();
        assert!(!store.is_dirty());
        store.push(ShapeParams::default().make_record());
        assert!(store.is_dirty());
        store.mark_clean();
        assert!(!store.is_dirty());
        store.set_selected(None);
        assert!(store.is_dirty());
    }
}
