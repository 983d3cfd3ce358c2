//! SubRenderer trait definition.

use crate::context::RenderContext;
use crate::resources::MeshManager;
use crate::scene::Scene;

/// A sub-renderer that handles a specific type of rendering.
///
/// Sub-renderers are composable units that can be registered with the main
/// renderer to add new rendering capabilities. Each sub-renderer is responsible
/// for a specific visual element (e.g., grid, shapes, gizmo).
///
/// # Priority
///
/// Sub-renderers are executed in order of their priority (lower values first).
/// Typical priority ranges:
/// - 0-99: Background elements (grid)
/// - 100-199: Main geometry (shapes)
/// - 1000+: Always-on-top elements (gizmo)
pub trait SubRenderer: Send + Sync {
    /// Returns the unique name of this sub-renderer.
    fn name(&self) -> &str;

    /// Returns the render priority (lower = rendered first).
    fn priority(&self) -> i32;

    /// Returns whether this sub-renderer is currently enabled.
    fn is_enabled(&self) -> bool;

    /// Enables or disables this sub-renderer.
    fn set_enabled(&mut self, enabled: bool);

    /// Called when the render context is initialized.
    ///
    /// Use this to create GPU resources (pipelines, buffers, etc.).
    fn on_init(&mut self, ctx: &RenderContext);

    /// Called when the viewport is resized.
    fn on_resize(&mut self, ctx: &RenderContext, width: u32, height: u32) {
        let _ = (ctx, width, height);
    }

    /// Prepare data for rendering.
    ///
    /// Called once per frame before the render pass. Use this to update
    /// per-object buffers, rebuild dynamic geometry, etc.
    fn prepare(&mut self, ctx: &RenderContext, scene: &Scene, meshes: &MeshManager);

    /// Execute the render commands.
    ///
    /// Called during the render pass. The sub-renderer should set its pipeline,
    /// bind groups, and issue draw calls. Bind group 0 holds the shared camera
    /// uniform and is already bound when this is called.
    fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, scene: &Scene, meshes: &'a MeshManager);

    /// Called when the sub-renderer is being destroyed.
    fn on_destroy(&mut self) {}
}
