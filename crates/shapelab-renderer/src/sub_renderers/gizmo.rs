//! Transform gizmo sub-renderer.
//!
//! Draws the translate/rotate/scale manipulator at the selected shape and
//! provides the axis hit test used by the viewport to start drags. The gizmo
//! is line geometry rebuilt each frame, rendered with the depth test disabled
//! so it stays visible through geometry.

use glam::Vec3;

use crate::constants::gizmo as constants;
use crate::context::RenderContext;
use crate::pipeline::PipelineConfig;
use crate::resources::MeshManager;
use crate::scene::Scene;
use crate::traits::SubRenderer;
use crate::vertex::PositionColorVertex;

/// Gizmo operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl GizmoMode {
    pub fn label(&self) -> &'static str {
        match self {
            GizmoMode::Translate => "Translate",
            GizmoMode::Rotate => "Rotate",
            GizmoMode::Scale => "Scale",
        }
    }
}

/// Axis picked by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoAxis {
    #[default]
    None,
    X,
    Y,
    Z,
}

impl GizmoAxis {
    /// Unit direction of the axis; `None` has no direction.
    pub fn direction(&self) -> Option<Vec3> {
        match self {
            GizmoAxis::None => None,
            GizmoAxis::X => Some(Vec3::X),
            GizmoAxis::Y => Some(Vec3::Y),
            GizmoAxis::Z => Some(Vec3::Z),
        }
    }
}

const X_COLOR: [f32; 3] = [0.86, 0.2, 0.2];
const Y_COLOR: [f32; 3] = [0.3, 0.8, 0.3];
const Z_COLOR: [f32; 3] = [0.2, 0.4, 0.9];
const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.8, 0.2];

// Rotate mode is the largest: three rings of RING_SEGMENTS lines each.
const MAX_VERTICES: usize = 3 * constants::RING_SEGMENTS as usize * 2 + 64;

/// Gizmo sub-renderer drawing the active manipulator.
pub struct GizmoSubRenderer {
    enabled: bool,
    initialized: bool,
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl GizmoSubRenderer {
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

impl Default for GizmoSubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for GizmoSubRenderer {
    fn name(&self) -> &str {
        "gizmo"
    }

    fn priority(&self) -> i32 {
        super::priorities::GIZMO
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn on_init(&mut self, ctx: &RenderContext) {
        let pipeline = PipelineConfig::new(
            "Gizmo",
            include_str!("../shaders/gizmo.wgsl"),
            ctx.surface_format(),
            ctx.depth_format(),
            &[ctx.camera_bind_group_layout()],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .with_depth_always()
        .with_sample_count(ctx.sample_count())
        .build(ctx.device());

        let vertex_buffer = ctx.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Gizmo Vertex Buffer"),
            size: (MAX_VERTICES * std::mem::size_of::<PositionColorVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.pipeline = Some(pipeline);
        self.vertex_buffer = Some(vertex_buffer);
        self.initialized = true;
    }

    fn prepare(&mut self, ctx: &RenderContext, scene: &Scene, _meshes: &MeshManager) {
        if !self.initialized {
            return;
        }

        let Some(object) = scene.selected_object() else {
            self.vertex_count = 0;
            return;
        };

        let position = object.transform.to_scale_rotation_translation().2;
        let gizmo = scene.gizmo();
        let vertices = build_gizmo_vertices(position, gizmo.scale, gizmo.mode, gizmo.highlight);

        debug_assert!(vertices.len() <= MAX_VERTICES);
        self.vertex_count = vertices.len() as u32;
        ctx.write_buffer(
            self.vertex_buffer.as_ref().unwrap(),
            0,
            bytemuck::cast_slice(&vertices),
        );
    }

    fn render<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        _scene: &Scene,
        _meshes: &'a MeshManager,
    ) {
        if !self.initialized || self.vertex_count == 0 {
            return;
        }

        pass.set_pipeline(self.pipeline.as_ref().unwrap());
        pass.set_vertex_buffer(0, self.vertex_buffer.as_ref().unwrap().slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

fn axis_color(axis: GizmoAxis, highlight: GizmoAxis) -> [f32; 3] {
    if axis == highlight {
        return HIGHLIGHT_COLOR;
    }
    match axis {
        GizmoAxis::X => X_COLOR,
        GizmoAxis::Y => Y_COLOR,
        GizmoAxis::Z => Z_COLOR,
        GizmoAxis::None => HIGHLIGHT_COLOR,
    }
}

/// Builds the line list for the given mode at the given position and size.
fn build_gizmo_vertices(
    position: Vec3,
    scale: f32,
    mode: GizmoMode,
    highlight: GizmoAxis,
) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();
    let axes = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    match mode {
        GizmoMode::Translate => {
            for axis in axes {
                let dir = axis.direction().unwrap();
                let color = axis_color(axis, highlight);
                let tip = position + dir * scale;
                push_line(&mut vertices, position, tip, color);
                // Arrowhead: four short lines back from the tip.
                let (u, v) = orthonormal_basis(dir);
                let back = tip - dir * scale * 0.15;
                let spread = scale * 0.06;
                for side in [u, -u, v, -v] {
                    push_line(&mut vertices, tip, back + side * spread, color);
                }
            }
        }
        GizmoMode::Rotate => {
            for axis in axes {
                let normal = axis.direction().unwrap();
                let color = axis_color(axis, highlight);
                let (u, v) = orthonormal_basis(normal);
                let segments = constants::RING_SEGMENTS;
                for seg in 0..segments {
                    let a0 = std::f32::consts::TAU * seg as f32 / segments as f32;
                    let a1 = std::f32::consts::TAU * (seg + 1) as f32 / segments as f32;
                    let p0 = position + (u * a0.cos() + v * a0.sin()) * scale;
                    let p1 = position + (u * a1.cos() + v * a1.sin()) * scale;
                    push_line(&mut vertices, p0, p1, color);
                }
            }
        }
        GizmoMode::Scale => {
            for axis in axes {
                let dir = axis.direction().unwrap();
                let color = axis_color(axis, highlight);
                let tip = position + dir * scale;
                push_line(&mut vertices, position, tip, color);
                // Square handle at the tip.
                let (u, v) = orthonormal_basis(dir);
                let s = scale * 0.06;
                let corners = [
                    tip + u * s + v * s,
                    tip - u * s + v * s,
                    tip - u * s - v * s,
                    tip + u * s - v * s,
                ];
                for i in 0..4 {
                    push_line(&mut vertices, corners[i], corners[(i + 1) % 4], color);
                }
            }
        }
    }

    vertices
}

fn push_line(vertices: &mut Vec<PositionColorVertex>, a: Vec3, b: Vec3, color: [f32; 3]) {
    vertices.push(PositionColorVertex {
        position: a.to_array(),
        color,
    });
    vertices.push(PositionColorVertex {
        position: b.to_array(),
        color,
    });
}

/// Two unit vectors spanning the plane perpendicular to `dir`.
fn orthonormal_basis(dir: Vec3) -> (Vec3, Vec3) {
    let helper = if dir.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
    let u = dir.cross(helper).normalize();
    let v = dir.cross(u);
    (u, v)
}

/// Tests a pointer ray against the gizmo at `position` with size `scale`.
///
/// Translate and scale test against the axis segments; rotate tests against
/// the rings. Returns the closest hit axis, or `GizmoAxis::None`.
pub fn gizmo_hit_test(
    ray_origin: Vec3,
    ray_dir: Vec3,
    position: Vec3,
    scale: f32,
    mode: GizmoMode,
) -> GizmoAxis {
    let tolerance = constants::PICK_TOLERANCE * scale;
    let axes = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];
    let mut best: Option<(f32, GizmoAxis)> = None;

    for axis in axes {
        let dir = axis.direction().unwrap();
        let candidate = match mode {
            GizmoMode::Translate | GizmoMode::Scale => {
                let end = position + dir * scale;
                ray_segment_distance(ray_origin, ray_dir, position, end)
                    .filter(|&(d, _)| d < tolerance)
            }
            GizmoMode::Rotate => ray_ring_distance(ray_origin, ray_dir, position, dir, scale)
                .filter(|&(d, _)| d < tolerance),
        };

        if let Some((_, t)) = candidate
            && best.is_none_or(|(best_t, _)| t < best_t)
        {
            best = Some((t, axis));
        }
    }

    best.map_or(GizmoAxis::None, |(_, axis)| axis)
}

/// Closest approach between a ray and a segment.
///
/// Returns (distance, ray parameter t), or None if the approach is behind the
/// ray origin.
fn ray_segment_distance(
    ray_origin: Vec3,
    ray_dir: Vec3,
    seg_start: Vec3,
    seg_end: Vec3,
) -> Option<(f32, f32)> {
    let seg_dir = seg_end - seg_start;
    let w = ray_origin - seg_start;

    let a = ray_dir.dot(ray_dir);
    let b = ray_dir.dot(seg_dir);
    let c = seg_dir.dot(seg_dir);
    let d = ray_dir.dot(w);
    let e = seg_dir.dot(w);

    let denom = a * c - b * b;
    let (t, s) = if denom.abs() < 1e-8 {
        // Parallel: project the segment start onto the ray.
        (-d / a, 0.0)
    } else {
        let s = ((a * e - b * d) / denom).clamp(0.0, 1.0);
        let t = (b * s - d) / a;
        (t, s)
    };

    if t < 0.0 {
        return None;
    }

    let p_ray = ray_origin + ray_dir * t;
    let p_seg = seg_start + seg_dir * s;
    Some(((p_ray - p_seg).length(), t))
}

/// Distance from a ray to a circle of `radius` around `center` in the plane
/// with normal `normal`.
///
/// Returns (distance to the ring, ray parameter t) for the plane hit, or None
/// if the ray is parallel to the plane or the hit is behind the origin.
fn ray_ring_distance(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    normal: Vec3,
    radius: f32,
) -> Option<(f32, f32)> {
    let denom = ray_dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray_origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    let dist = ((hit - center).length() - radius).abs();
    Some((dist, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_hit_on_x_axis() {
        // Ray from +Z looking at a point halfway along the X arm.
        let origin = Vec3::new(0.5, 0.0, 5.0);
        let dir = Vec3::NEG_Z;
        let axis = gizmo_hit_test(origin, dir, Vec3::ZERO, 1.0, GizmoMode::Translate);
        assert_eq!(axis, GizmoAxis::X);
    }

    #[test]
    fn miss_returns_none() {
        let origin = Vec3::new(10.0, 10.0, 5.0);
        let dir = Vec3::NEG_Z;
        let axis = gizmo_hit_test(origin, dir, Vec3::ZERO, 1.0, GizmoMode::Translate);
        assert_eq!(axis, GizmoAxis::None);
    }

    #[test]
    fn rotate_hit_on_z_ring() {
        // The Z ring lies in the XY plane; aim at a point on its rim.
        let origin = Vec3::new(1.0, 0.0, 5.0);
        let dir = Vec3::NEG_Z;
        let axis = gizmo_hit_test(origin, dir, Vec3::ZERO, 1.0, GizmoMode::Rotate);
        assert_eq!(axis, GizmoAxis::Z);
    }

    #[test]
    fn hit_scales_with_gizmo_size() {
        // At twice the size the same offset lands on the Y arm.
        let origin = Vec3::new(0.0, 1.5, 5.0);
        let dir = Vec3::NEG_Z;
        assert_eq!(
            gizmo_hit_test(origin, dir, Vec3::ZERO, 2.0, GizmoMode::Scale),
            GizmoAxis::Y
        );
        assert_eq!(
            gizmo_hit_test(origin, dir, Vec3::ZERO, 1.0, GizmoMode::Scale),
            GizmoAxis::None
        );
    }

    #[test]
    fn behind_origin_is_not_a_hit() {
        let origin = Vec3::new(0.5, 0.0, 5.0);
        let dir = Vec3::Z;
        assert_eq!(
            gizmo_hit_test(origin, dir, Vec3::ZERO, 1.0, GizmoMode::Translate),
            GizmoAxis::None
        );
    }

    #[test]
    fn every_mode_builds_within_capacity() {
        for mode in [GizmoMode::Translate, GizmoMode::Rotate, GizmoMode::Scale] {
            let vertices = build_gizmo_vertices(Vec3::ONE, 1.5, mode, GizmoAxis::X);
            assert!(!vertices.is_empty());
            assert!(vertices.len() <= MAX_VERTICES);
            assert_eq!(vertices.len() % 2, 0);
        }
    }
}
