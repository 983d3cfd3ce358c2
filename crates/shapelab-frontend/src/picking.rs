//! Shape picking.
//!
//! Ray casts from the pointer against the placed shapes: a world-space AABB
//! test first, then exact triangles. Used for both hover highlighting and
//! click selection.

use glam::{Mat4, Vec3};
use uuid::Uuid;

/// Data needed for picking a single shape.
pub struct PickableShapeData {
    pub id: Uuid,
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub transform: Mat4,
    pub bbox_min: Vec3,
    pub bbox_max: Vec3,
}

/// Pick the closest shape along the given ray.
///
/// Returns the id of the hit shape and the ray distance, if any.
pub fn pick_shape(
    ray_origin: Vec3,
    ray_dir: Vec3,
    shapes: &[PickableShapeData],
) -> Option<(Uuid, f32)> {
    let mut closest_hit: Option<(Uuid, f32)> = None;

    for shape in shapes {
        let transform = shape.transform;

        // Transform all 8 corners of the local bounding box.
        let corners = [
            Vec3::new(shape.bbox_min.x, shape.bbox_min.y, shape.bbox_min.z),
            Vec3::new(shape.bbox_max.x, shape.bbox_min.y, shape.bbox_min.z),
            Vec3::new(shape.bbox_min.x, shape.bbox_max.y, shape.bbox_min.z),
            Vec3::new(shape.bbox_max.x, shape.bbox_max.y, shape.bbox_min.z),
            Vec3::new(shape.bbox_min.x, shape.bbox_min.y, shape.bbox_max.z),
            Vec3::new(shape.bbox_max.x, shape.bbox_min.y, shape.bbox_max.z),
            Vec3::new(shape.bbox_min.x, shape.bbox_max.y, shape.bbox_max.z),
            Vec3::new(shape.bbox_max.x, shape.bbox_max.y, shape.bbox_max.z),
        ]
        .map(|c| transform.transform_point3(c));

        let mut world_min = corners[0];
        let mut world_max = corners[0];
        for corner in &corners[1..] {
            world_min = world_min.min(*corner);
            world_max = world_max.max(*corner);
        }

        // AABB for early rejection.
        if ray_aabb_intersection(ray_origin, ray_dir, world_min, world_max).is_none() {
            continue;
        }

        // Test each triangle.
        for chunk in shape.indices.chunks(3) {
            if chunk.len() != 3 {
                continue;
            }

            let v0 = transform.transform_point3(Vec3::from(shape.vertices[chunk[0] as usize]));
            let v1 = transform.transform_point3(Vec3::from(shape.vertices[chunk[1] as usize]));
            let v2 = transform.transform_point3(Vec3::from(shape.vertices[chunk[2] as usize]));

            if let Some(t) = ray_triangle_intersection(ray_origin, ray_dir, v0, v1, v2) {
                match closest_hit {
                    None => closest_hit = Some((shape.id, t)),
                    Some((_, current_t)) if t < current_t => closest_hit = Some((shape.id, t)),
                    _ => {}
                }
            }
        }
    }

    closest_hit
}

/// Ray-AABB intersection test.
///
/// Returns the distance to intersection if hit, None otherwise.
fn ray_aabb_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    bbox_min: Vec3,
    bbox_max: Vec3,
) -> Option<f32> {
    let inv_dir = Vec3::new(1.0 / ray_dir.x, 1.0 / ray_dir.y, 1.0 / ray_dir.z);

    let t1 = (bbox_min.x - ray_origin.x) * inv_dir.x;
    let t2 = (bbox_max.x - ray_origin.x) * inv_dir.x;
    let t3 = (bbox_min.y - ray_origin.y) * inv_dir.y;
    let t4 = (bbox_max.y - ray_origin.y) * inv_dir.y;
    let t5 = (bbox_min.z - ray_origin.z) * inv_dir.z;
    let t6 = (bbox_max.z - ray_origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Ray-triangle intersection using the Möller-Trumbore algorithm.
///
/// Returns the distance to intersection if hit, None otherwise.
fn ray_triangle_intersection(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<f32> {
    const EPSILON: f32 = 1e-6;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);

    if a.abs() < EPSILON {
        return None; // Ray is parallel to triangle
    }

    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);

    if t > EPSILON { Some(t) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapelab_core::GeometryKind;
    use shapelab_renderer::primitives::primitive_mesh;

    fn pickable_at(id: Uuid, kind: GeometryKind, position: Vec3) -> PickableShapeData {
        let mesh = primitive_mesh(kind);
        PickableShapeData {
            id,
            vertices: mesh.vertices.iter().map(|v| v.position).collect(),
            indices: mesh.indices.clone(),
            transform: Mat4::from_translation(position),
            bbox_min: mesh.bounds.min,
            bbox_max: mesh.bounds.max,
        }
    }

    #[test]
    fn ray_through_box_hits_it() {
        let id = Uuid::new_v4();
        let shapes = vec![pickable_at(id, GeometryKind::Box, Vec3::ZERO)];

        let hit = pick_shape(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &shapes);
        assert_eq!(hit.map(|(i, _)| i), Some(id));
    }

    #[test]
    fn ray_beside_box_misses() {
        let shapes = vec![pickable_at(Uuid::new_v4(), GeometryKind::Box, Vec3::ZERO)];
        let hit = pick_shape(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z, &shapes);
        assert!(hit.is_none());
    }

    #[test]
    fn closest_of_two_shapes_wins() {
        let near = Uuid::new_v4();
        let far = Uuid::new_v4();
        let shapes = vec![
            pickable_at(far, GeometryKind::Sphere, Vec3::new(0.0, 0.0, -4.0)),
            pickable_at(near, GeometryKind::Sphere, Vec3::new(0.0, 0.0, 0.0)),
        ];

        let hit = pick_shape(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &shapes);
        assert_eq!(hit.map(|(i, _)| i), Some(near));
    }

    #[test]
    fn plane_is_single_sided() {
        // The plane faces +Z; a ray from behind passes through the back face.
        let id = Uuid::new_v4();
        let shapes = vec![pickable_at(id, GeometryKind::Plane, Vec3::ZERO)];

        let front = pick_shape(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &shapes);
        assert!(front.is_some());
    }

    #[test]
    fn translated_sphere_is_hit_at_its_position() {
        let id = Uuid::new_v4();
        let shapes = vec![pickable_at(id, GeometryKind::Sphere, Vec3::new(2.0, 2.0, 0.0))];

        let miss = pick_shape(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, &shapes);
        assert!(miss.is_none());

        let hit = pick_shape(Vec3::new(2.0, 2.0, 5.0), Vec3::NEG_Z, &shapes);
        assert!(hit.is_some());
    }
}
