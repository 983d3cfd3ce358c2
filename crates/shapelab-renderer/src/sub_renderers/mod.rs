//! Built-in sub-renderers.
//!
//! - [`GridSubRenderer`]: ground reference grid
//! - [`ShapeSubRenderer`]: shape geometry with per-shape material and lights
//! - [`GizmoSubRenderer`]: transform manipulation tool

pub mod gizmo;
pub mod grid;
pub mod shapes;

pub use gizmo::{GizmoAxis, GizmoMode, GizmoSubRenderer, gizmo_hit_test};
pub use grid::GridSubRenderer;
pub use shapes::ShapeSubRenderer;

/// Render priorities for sub-renderers.
///
/// Lower values are rendered first (background), higher values are rendered
/// on top. Use these constants when implementing custom sub-renderers.
pub mod priorities {
    /// Grid is rendered first (background)
    pub const GRID: i32 = 10;
    /// Shapes are the main content
    pub const SHAPES: i32 = 100;
    /// Gizmo is always on top
    pub const GIZMO: i32 = 1000;
}
