//! Main renderer tying together context, scene, meshes and sub-renderers.

use std::sync::Arc;

use shapelab_core::GeometryKind;
use tracing::info;

use crate::camera::Camera;
use crate::constants::gizmo::DISTANCE_SCALE;
use crate::context::RenderContext;
use crate::plugin::RendererRegistry;
use crate::resources::{MeshHandle, MeshManager};
use crate::scene::Scene;
use crate::sub_renderers::{GizmoSubRenderer, GridSubRenderer, ShapeSubRenderer};

/// The editor renderer.
///
/// Owns the GPU context, the scene, the mesh manager and the registry of
/// sub-renderers, and drives one render pass per frame into a caller-provided
/// texture view.
pub struct Renderer {
    context: RenderContext,
    scene: Scene,
    meshes: MeshManager,
    registry: RendererRegistry,
    camera: Camera,
    depth_view: wgpu::TextureView,
    msaa_view: Option<wgpu::TextureView>,
}

impl Renderer {
    /// Creates a renderer with the built-in sub-renderers registered.
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let context = RenderContext::new(device, queue, surface_format, width, height);

        let mut registry = RendererRegistry::new();
        registry.register(GridSubRenderer::new());
        registry.register(ShapeSubRenderer::new());
        registry.register(GizmoSubRenderer::new());
        registry.init_all(&context);

        let depth_view = create_depth_texture(&context, width, height);
        let msaa_view = create_msaa_texture(&context, width, height);

        let camera = Camera::new(width as f32 / height.max(1) as f32);

        info!(width, height, "renderer initialized");

        Self {
            context,
            scene: Scene::new(),
            meshes: MeshManager::new(),
            registry,
            camera,
            depth_view,
            msaa_view,
        }
    }

    /// Resizes the render targets.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.context.width() && height == self.context.height() {
            return;
        }

        self.context.resize(width, height);
        self.depth_view = create_depth_texture(&self.context, width, height);
        self.msaa_view = create_msaa_texture(&self.context, width, height);
        self.camera.update_aspect(width as f32 / height as f32);
        self.registry.resize_all(&self.context, width, height);
    }

    /// Renders one frame into the given view.
    pub fn render(&mut self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        self.context.update_camera(&self.camera.uniform());

        // Keep the gizmo a constant apparent size.
        if let Some(object) = self.scene.selected_object() {
            let position = object.transform.to_scale_rotation_translation().2;
            let distance = (self.camera.position() - position).length();
            self.scene.gizmo_mut().scale = distance * DISTANCE_SCALE;
        }

        self.registry
            .prepare_all(&self.context, &self.scene, &self.meshes);

        let clear_color = self.scene.environment().background_color();
        let (view, resolve_target) = match &self.msaa_view {
            Some(msaa) => (msaa, Some(target)),
            None => (target, None),
        };

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Viewport Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            pass.set_bind_group(0, self.context.camera_bind_group(), &[]);
            self.registry.render_all(&mut pass, &self.scene, &self.meshes);
        }

        self.scene.mark_clean();
    }

    /// Returns the mesh handle for a primitive kind, uploading it on first use.
    pub fn primitive_handle(&mut self, kind: GeometryKind) -> MeshHandle {
        self.meshes.primitive(&self.context, kind)
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn meshes(&self) -> &MeshManager {
        &self.meshes
    }

    pub fn registry_mut(&mut self) -> &mut RendererRegistry {
        &mut self.registry
    }
}

fn create_depth_texture(ctx: &RenderContext, width: u32, height: u32) -> wgpu::TextureView {
    let texture = ctx.device().create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: ctx.sample_count(),
        dimension: wgpu::TextureDimension::D2,
        format: ctx.depth_format(),
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_msaa_texture(ctx: &RenderContext, width: u32, height: u32) -> Option<wgpu::TextureView> {
    if ctx.sample_count() <= 1 {
        return None;
    }
    let texture = ctx.device().create_texture(&wgpu::TextureDescriptor {
        label: Some("MSAA Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: ctx.sample_count(),
        dimension: wgpu::TextureDimension::D2,
        format: ctx.surface_format(),
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    Some(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}
