//! Primitive mesh generators.
//!
//! Unit-sized meshes matching the panel's geometry options: sphere of radius
//! one, 1x1 plane in XY facing +Z, unit box, cylinder of radius one and
//! height one. One generator per [`GeometryKind`]; the enum is closed, so the
//! mapping is total.

use std::f32::consts::PI;

use glam::Vec3;
use shapelab_core::GeometryKind;

use crate::resources::MeshData;
use crate::vertex::MeshVertex;

/// Builds the mesh for a geometry kind.
pub fn primitive_mesh(kind: GeometryKind) -> MeshData {
    match kind {
        GeometryKind::Sphere => sphere(32, 16),
        GeometryKind::Plane => plane(),
        GeometryKind::Box => cuboid(),
        GeometryKind::Cylinder => cylinder(32),
    }
}

/// Unit sphere from latitude rings and longitude segments.
fn sphere(segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            // Unit sphere: the position is its own normal.
            vertices.push(MeshVertex::new([x, y, z], [x, y, z]));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    MeshData::indexed(vertices, indices)
}

/// 1x1 plane in the XY plane, facing +Z (single-sided).
fn plane() -> MeshData {
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        MeshVertex::new([-0.5, -0.5, 0.0], n),
        MeshVertex::new([0.5, -0.5, 0.0], n),
        MeshVertex::new([0.5, 0.5, 0.0], n),
        MeshVertex::new([-0.5, 0.5, 0.0], n),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    MeshData::indexed(vertices, indices)
}

/// Unit box with per-face normals.
fn cuboid() -> MeshData {
    // (normal, tangent u, tangent v) with u x v = normal.
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (i, (n, u, v)) in faces.iter().enumerate() {
        let center = *n * 0.5;
        let corners = [
            center - *u * 0.5 - *v * 0.5,
            center + *u * 0.5 - *v * 0.5,
            center + *u * 0.5 + *v * 0.5,
            center - *u * 0.5 + *v * 0.5,
        ];
        for corner in corners {
            vertices.push(MeshVertex::new(corner.to_array(), n.to_array()));
        }
        let base = (i * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData::indexed(vertices, indices)
}

/// Cylinder of radius one and height one along Y, with caps.
fn cylinder(segments: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side rings with outward normals.
    for seg in 0..=segments {
        let theta = 2.0 * PI * seg as f32 / segments as f32;
        let (x, z) = (theta.cos(), theta.sin());
        vertices.push(MeshVertex::new([x, -0.5, z], [x, 0.0, z]));
        vertices.push(MeshVertex::new([x, 0.5, z], [x, 0.0, z]));
    }
    for seg in 0..segments {
        let bottom = seg * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        indices.extend_from_slice(&[bottom, top, next_bottom, next_bottom, top, next_top]);
    }

    // Top cap.
    let top_center = vertices.len() as u32;
    vertices.push(MeshVertex::new([0.0, 0.5, 0.0], [0.0, 1.0, 0.0]));
    let top_ring = vertices.len() as u32;
    for seg in 0..=segments {
        let theta = 2.0 * PI * seg as f32 / segments as f32;
        vertices.push(MeshVertex::new(
            [theta.cos(), 0.5, theta.sin()],
            [0.0, 1.0, 0.0],
        ));
    }
    for seg in 0..segments {
        indices.extend_from_slice(&[top_center, top_ring + seg + 1, top_ring + seg]);
    }

    // Bottom cap.
    let bottom_center = vertices.len() as u32;
    vertices.push(MeshVertex::new([0.0, -0.5, 0.0], [0.0, -1.0, 0.0]));
    let bottom_ring = vertices.len() as u32;
    for seg in 0..=segments {
        let theta = 2.0 * PI * seg as f32 / segments as f32;
        vertices.push(MeshVertex::new(
            [theta.cos(), -0.5, theta.sin()],
            [0.0, -1.0, 0.0],
        ));
    }
    for seg in 0..segments {
        indices.extend_from_slice(&[bottom_center, bottom_ring + seg, bottom_ring + seg + 1]);
    }

    MeshData::indexed(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn check_mesh(data: &MeshData) {
        assert!(!data.vertices.is_empty());
        assert_eq!(data.indices.len() % 3, 0);
        for &i in &data.indices {
            assert!((i as usize) < data.vertices.len(), "index {i} out of range");
        }
        for v in &data.vertices {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "normal not unit: {:?}", v.normal);
        }
    }

    #[test]
    fn all_kinds_generate_valid_meshes() {
        for kind in GeometryKind::ALL {
            check_mesh(&primitive_mesh(kind));
        }
    }

    #[test]
    fn sphere_bounds_are_unit() {
        let data = primitive_mesh(GeometryKind::Sphere);
        let size = data.bounds.size();
        assert!((size.x - 2.0).abs() < 1e-3);
        assert!((size.y - 2.0).abs() < 1e-3);
    }

    #[test]
    fn box_has_24_vertices() {
        let data = primitive_mesh(GeometryKind::Box);
        assert_eq!(data.vertices.len(), 24);
        assert_eq!(data.indices.len(), 36);
        assert_eq!(data.bounds.min, Vec3::splat(-0.5));
        assert_eq!(data.bounds.max, Vec3::splat(0.5));
    }

    #[test]
    fn cylinder_spans_unit_height() {
        let data = primitive_mesh(GeometryKind::Cylinder);
        assert!((data.bounds.min.y + 0.5).abs() < 1e-5);
        assert!((data.bounds.max.y - 0.5).abs() < 1e-5);
    }
}
