//! Shapelab renderer
//!
//! WGPU-based 3D rendering for the shape editor.
//!
//! # Architecture
//!
//! The renderer is built on a plugin-based architecture:
//!
//! - [`traits::SubRenderer`] - Trait for implementing custom render passes
//! - [`plugin::RendererRegistry`] - Priority-ordered pass registry
//! - [`context::RenderContext`] - GPU context abstraction
//! - [`scene::Scene`] - Render objects, selection/hover state, environment
//! - [`resources::MeshManager`] - GPU mesh resources, cached per primitive kind
//!
//! The built-in passes are the ground grid, the shape pass (per-shape material
//! and lights, hover/selection highlight) and the transform gizmo.

pub mod camera;
pub mod constants;
pub mod context;
pub mod environment;
pub mod light;
pub mod pipeline;
pub mod plugin;
pub mod primitives;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod sub_renderers;
pub mod traits;
pub mod vertex;

// Re-exports for convenience
pub use camera::{Camera, CameraUniform};
pub use context::RenderContext;
pub use environment::{EnvPreset, Environment};
pub use light::ShapeLightsUniform;
pub use plugin::RendererRegistry;
pub use renderer::Renderer;
pub use resources::{GpuMesh, MeshData, MeshHandle, MeshManager};
pub use scene::{BoundingBox, GizmoState, RenderObject, Scene};
pub use sub_renderers::{GizmoAxis, GizmoMode, gizmo_hit_test};
pub use traits::SubRenderer;
pub use vertex::{MeshVertex, PositionColorVertex};
