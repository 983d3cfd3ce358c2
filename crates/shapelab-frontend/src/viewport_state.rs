//! Viewport rendering state

use std::collections::HashMap;
use std::sync::Arc;

use glam::Mat4;
use parking_lot::Mutex;
use tracing::warn;

use shapelab_core::GeometryKind;
use shapelab_renderer::primitives::primitive_mesh;
use shapelab_renderer::{MeshData, RenderObject, Renderer, ShapeLightsUniform};

use crate::app_state::AppState;
use crate::picking::PickableShapeData;

/// Render texture for viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Viewport rendering state
pub struct ViewportState {
    pub renderer: Renderer,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    render_texture: Option<RenderTexture>,
    // CPU copies of the primitive meshes, kept for ray picking.
    pick_meshes: HashMap<GeometryKind, MeshData>,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
    ) -> Self {
        let renderer = Renderer::new(device.clone(), queue.clone(), format, 800, 600);
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
            pick_meshes: HashMap::new(),
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        let needs_recreate = self
            .render_texture
            .as_ref()
            .is_none_or(|t| t.width != width || t.height != height);

        if needs_recreate {
            // Free old texture if exists
            if let Some(old) = self.render_texture.take() {
                egui_renderer.free_texture(&old.egui_texture_id);
            }

            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Viewport Render Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: self.renderer.context().surface_format(),
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });

            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            // Register with egui
            let egui_texture_id = egui_renderer.register_native_texture(
                &self.device,
                &view,
                wgpu::FilterMode::Linear,
            );

            self.renderer.resize(width, height);

            self.render_texture = Some(RenderTexture {
                texture,
                view,
                egui_texture_id,
                width,
                height,
            });
        }

        self.render_texture.as_ref().unwrap().egui_texture_id
    }

    /// Render the 3D scene to the texture
    pub fn render(&mut self) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view);

        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Mirrors the scene store into the render scene.
    ///
    /// Records drive mesh, material, lights and placement; rotation and scale
    /// accumulated by gizmo drags are kept from the existing object.
    pub fn sync_scene(&mut self, state: &mut AppState) {
        if *self.renderer.scene().environment() != state.environment {
            self.renderer.scene_mut().set_environment(state.environment);
        }
        self.renderer.scene_mut().gizmo_mut().mode = state.gizmo_mode;

        if !state.store.is_dirty() {
            return;
        }

        for record in state.store.shapes().to_vec() {
            let handle = self.renderer.primitive_handle(record.kind);
            let Some(mesh) = self.renderer.meshes().get(handle) else {
                debug_assert!(false, "primitive mesh missing for {:?}", record.kind);
                warn!(kind = record.kind.label(), "no mesh for shape, skipping");
                continue;
            };
            let bounds = mesh.bounds;
            let lights = ShapeLightsUniform::from_records(&record.lights);

            let scene = self.renderer.scene_mut();
            if let Some(object) = scene.get_mut(record.id) {
                let (scale, rotation, _) = object.transform.to_scale_rotation_translation();
                object.transform =
                    Mat4::from_scale_rotation_translation(scale, rotation, record.position);
                object.color = record.color;
                object.roughness = record.roughness;
                object.lights = lights;
            } else {
                scene.insert(
                    RenderObject::new(record.id, handle, bounds)
                        .with_transform(Mat4::from_translation(record.position))
                        .with_material(record.color, record.roughness)
                        .with_lights(lights),
                );
            }
        }

        let live: Vec<_> = state.store.shapes().iter().map(|s| s.id).collect();
        self.renderer.scene_mut().retain_ids(&live);
        self.renderer.scene_mut().set_selected(state.store.selected());

        state.store.mark_clean();
    }

    /// Picking data for every shape currently in the scene.
    pub fn pickables(&mut self, state: &AppState) -> Vec<PickableShapeData> {
        let mut out = Vec::with_capacity(state.store.len());
        for record in state.store.shapes() {
            let mesh = self
                .pick_meshes
                .entry(record.kind)
                .or_insert_with(|| primitive_mesh(record.kind));

            let transform = self
                .renderer
                .scene()
                .get(record.id)
                .map(|o| o.transform)
                .unwrap_or_else(|| Mat4::from_translation(record.position));

            out.push(PickableShapeData {
                id: record.id,
                vertices: mesh.vertices.iter().map(|v| v.position).collect(),
                indices: mesh.indices.clone(),
                transform,
                bbox_min: mesh.bounds.min,
                bbox_max: mesh.bounds.max,
            });
        }
        out
    }
}

pub type SharedViewportState = Arc<Mutex<ViewportState>>;
