//! Grid sub-renderer for the ground reference plane.

use crate::constants::grid as constants;
use crate::context::RenderContext;
use crate::pipeline::PipelineConfig;
use crate::resources::MeshManager;
use crate::scene::Scene;
use crate::traits::SubRenderer;
use crate::vertex::PositionColorVertex;

/// Grid sub-renderer for the ground plane (XZ, Y-up).
pub struct GridSubRenderer {
    enabled: bool,
    initialized: bool,
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl GridSubRenderer {
    /// Creates a new grid sub-renderer.
    pub fn new() -> Self {
        Self {
            enabled: true,
            initialized: false,
            pipeline: None,
            vertex_buffer: None,
            vertex_count: 0,
        }
    }
}

impl Default for GridSubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for GridSubRenderer {
    fn name(&self) -> &str {
        "grid"
    }

    fn priority(&self) -> i32 {
        super::priorities::GRID
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn on_init(&mut self, ctx: &RenderContext) {
        let pipeline = PipelineConfig::new(
            "Grid",
            include_str!("../shaders/grid.wgsl"),
            ctx.surface_format(),
            ctx.depth_format(),
            &[ctx.camera_bind_group_layout()],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .with_sample_count(ctx.sample_count())
        .build(ctx.device());

        let vertices = generate_grid_vertices(constants::DEFAULT_SIZE, constants::DEFAULT_SPACING);
        self.vertex_count = vertices.len() as u32;

        let vertex_buffer = ctx.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        self.pipeline = Some(pipeline);
        self.vertex_buffer = Some(vertex_buffer);
        self.initialized = true;
    }

    fn prepare(&mut self, _ctx: &RenderContext, _scene: &Scene, _meshes: &MeshManager) {
        // Static geometry, nothing to do per frame.
    }

    fn render<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        _scene: &Scene,
        _meshes: &'a MeshManager,
    ) {
        if !self.initialized {
            return;
        }

        let pipeline = self.pipeline.as_ref().unwrap();
        let vertex_buffer = self.vertex_buffer.as_ref().unwrap();

        pass.set_pipeline(pipeline);
        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Generate grid line vertices on the XZ plane. The center lines use the axis
/// colors (X red, Z blue).
fn generate_grid_vertices(size: f32, spacing: f32) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();
    let half_size = size;
    let num_lines = (size / spacing) as i32;

    // Lines parallel to X axis
    for i in -num_lines..=num_lines {
        let z = i as f32 * spacing;
        let color = if i == 0 {
            constants::X_AXIS_COLOR
        } else {
            constants::LINE_COLOR
        };

        vertices.push(PositionColorVertex {
            position: [-half_size, 0.0, z],
            color,
        });
        vertices.push(PositionColorVertex {
            position: [half_size, 0.0, z],
            color,
        });
    }

    // Lines parallel to Z axis
    for i in -num_lines..=num_lines {
        let x = i as f32 * spacing;
        let color = if i == 0 {
            constants::Z_AXIS_COLOR
        } else {
            constants::LINE_COLOR
        };

        vertices.push(PositionColorVertex {
            position: [x, 0.0, -half_size],
            color,
        });
        vertices.push(PositionColorVertex {
            position: [x, 0.0, half_size],
            color,
        });
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_line_count_matches_size() {
        let vertices = generate_grid_vertices(10.0, 1.0);
        // 21 lines per direction, 2 vertices per line.
        assert_eq!(vertices.len(), 21 * 2 * 2);
    }

    #[test]
    fn grid_lies_on_ground_plane() {
        for v in generate_grid_vertices(5.0, 1.0) {
            assert_eq!(v.position[1], 0.0);
        }
    }
}
