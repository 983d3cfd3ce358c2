//! Render object definition.

use glam::Mat4;
use uuid::Uuid;

use super::BoundingBox;
use crate::light::ShapeLightsUniform;
use crate::resources::MeshHandle;

/// A renderable shape in the scene.
///
/// Carries everything the shape pass needs, separated from the GPU resources
/// which live in the mesh manager and the pass itself. The id matches the
/// shape record it was built from.
#[derive(Debug, Clone)]
pub struct RenderObject {
    /// Identity; equals the originating shape record's id.
    pub id: Uuid,

    /// Handle to the mesh stored in the MeshManager.
    pub mesh: MeshHandle,

    /// World transform. Placement comes from the record; rotation and scale
    /// are accumulated by gizmo drags.
    pub transform: Mat4,

    /// Material base color (RGB).
    pub color: [f32; 3],

    /// Material roughness in [0, 1].
    pub roughness: f32,

    /// The shape's three lights, packed for the GPU.
    pub lights: ShapeLightsUniform,

    /// Whether this object is visible.
    pub visible: bool,

    /// Whether this object is selected (gizmo target).
    pub selected: bool,

    /// Whether the pointer is over this object.
    pub hovered: bool,

    /// Local bounding box (before transform).
    pub bounds: BoundingBox,
}

impl RenderObject {
    /// Creates a new render object with default settings.
    pub fn new(id: Uuid, mesh: MeshHandle, bounds: BoundingBox) -> Self {
        Self {
            id,
            mesh,
            transform: Mat4::IDENTITY,
            color: [0.8, 0.8, 0.8],
            roughness: 1.0,
            lights: ShapeLightsUniform::default(),
            visible: true,
            selected: false,
            hovered: false,
            bounds,
        }
    }

    /// Sets the transform matrix.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the material color and roughness.
    pub fn with_material(mut self, color: [f32; 3], roughness: f32) -> Self {
        self.color = color;
        self.roughness = roughness;
        self
    }

    /// Sets the packed light data.
    pub fn with_lights(mut self, lights: ShapeLightsUniform) -> Self {
        self.lights = lights;
        self
    }

    /// Returns the world-space bounding box.
    pub fn world_bounds(&self) -> BoundingBox {
        self.bounds.transform(&self.transform)
    }
}
