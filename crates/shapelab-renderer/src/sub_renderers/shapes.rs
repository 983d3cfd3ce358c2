//! Shape sub-renderer.
//!
//! Draws every visible scene object with its material and its own three-light
//! rig. Hover and selection are shown as a rim highlight, driven by per-object
//! flags in the uniform.

use std::collections::HashMap;

use uuid::Uuid;

use crate::context::RenderContext;
use crate::light::ShapeLightsUniform;
use crate::pipeline::PipelineConfig;
use crate::resources::MeshManager;
use crate::scene::{RenderObject, Scene};
use crate::traits::SubRenderer;
use crate::vertex::MeshVertex;

/// Per-object uniform data.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    /// Base color (rgb) and roughness (w).
    color_roughness: [f32; 4],
    /// x = selected, y = hovered; zw unused.
    flags: [f32; 4],
    lights: ShapeLightsUniform,
}

impl ObjectUniform {
    fn from_object(object: &RenderObject) -> Self {
        Self {
            model: object.transform.to_cols_array_2d(),
            color_roughness: [
                object.color[0],
                object.color[1],
                object.color[2],
                object.roughness,
            ],
            flags: [
                if object.selected { 1.0 } else { 0.0 },
                if object.hovered { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
            lights: object.lights,
        }
    }
}

/// Environment uniform shared by all shapes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct EnvUniform {
    /// Ambient tint (rgb); w unused.
    ambient_tint: [f32; 4],
}

struct ObjectBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Shape sub-renderer rendering all scene objects.
pub struct ShapeSubRenderer {
    enabled: bool,
    initialized: bool,
    pipeline: Option<wgpu::RenderPipeline>,
    object_layout: Option<wgpu::BindGroupLayout>,
    env_buffer: Option<wgpu::Buffer>,
    bindings: HashMap<Uuid, ObjectBinding>,
}

impl ShapeSubRenderer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            initialized: false,
            pipeline: None,
            object_layout: None,
            env_buffer: None,
            bindings: HashMap::new(),
        }
    }

    fn ensure_binding(&mut self, ctx: &RenderContext, id: Uuid) {
        if self.bindings.contains_key(&id) {
            return;
        }
        let layout = self.object_layout.as_ref().unwrap();
        let env_buffer = self.env_buffer.as_ref().unwrap();

        let buffer = ctx.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Object Buffer"),
            size: std::mem::size_of::<ObjectUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shape Object Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: env_buffer.as_entire_binding(),
                },
            ],
        });

        self.bindings.insert(id, ObjectBinding { buffer, bind_group });
    }
}

impl Default for ShapeSubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for ShapeSubRenderer {
    fn name(&self) -> &str {
        "shapes"
    }

    fn priority(&self) -> i32 {
        super::priorities::SHAPES
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn on_init(&mut self, ctx: &RenderContext) {
        let object_layout = ctx.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shape Object Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let env_buffer = ctx.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Env Buffer"),
            contents: bytemuck::cast_slice(&[EnvUniform {
                ambient_tint: [1.0, 1.0, 1.0, 0.0],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let pipeline = PipelineConfig::new(
            "Shapes",
            include_str!("../shaders/shape.wgsl"),
            ctx.surface_format(),
            ctx.depth_format(),
            &[ctx.camera_bind_group_layout(), &object_layout],
        )
        .with_vertex_layouts(vec![MeshVertex::layout()])
        .with_sample_count(ctx.sample_count())
        .build(ctx.device());

        self.pipeline = Some(pipeline);
        self.object_layout = Some(object_layout);
        self.env_buffer = Some(env_buffer);
        self.initialized = true;
    }

    fn prepare(&mut self, ctx: &RenderContext, scene: &Scene, _meshes: &MeshManager) {
        if !self.initialized {
            return;
        }

        let tint = scene.environment().preset.ambient_tint();
        ctx.write_buffer(
            self.env_buffer.as_ref().unwrap(),
            0,
            bytemuck::cast_slice(&[EnvUniform {
                ambient_tint: [tint[0], tint[1], tint[2], 0.0],
            }]),
        );

        let live: Vec<Uuid> = scene.objects().map(|o| o.id).collect();
        self.bindings.retain(|id, _| live.contains(id));

        for object in scene.objects() {
            self.ensure_binding(ctx, object.id);
            let binding = &self.bindings[&object.id];
            ctx.write_buffer(
                &binding.buffer,
                0,
                bytemuck::cast_slice(&[ObjectUniform::from_object(object)]),
            );
        }
    }

    fn render<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        scene: &Scene,
        meshes: &'a MeshManager,
    ) {
        if !self.initialized || scene.is_empty() {
            return;
        }

        pass.set_pipeline(self.pipeline.as_ref().unwrap());

        for object in scene.objects() {
            if !object.visible {
                continue;
            }
            let Some(binding) = self.bindings.get(&object.id) else {
                continue;
            };
            let Some(mesh) = meshes.get(object.mesh) else {
                continue;
            };

            pass.set_bind_group(1, &binding.bind_group, &[]);
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    fn on_destroy(&mut self) {
        self.bindings.clear();
    }
}
