//! Axis-aligned bounding box.

use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a bounding box from min/max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// An empty box (union identity).
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// World-space AABB of this box under the given transform, computed from
    /// the eight transformed corners.
    pub fn transform(&self, transform: &Mat4) -> Self {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in corners {
            let p = transform.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_with_empty_is_identity() {
        let b = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(BoundingBox::empty().union(&b), b);
    }

    #[test]
    fn translated_box_moves_bounds() {
        let b = BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        let t = Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0));
        let moved = b.transform(&t);
        assert_eq!(moved.center(), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(moved.size(), Vec3::splat(1.0));
    }

    #[test]
    fn rotated_box_grows_bounds() {
        let b = BoundingBox::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        let r = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let rotated = b.transform(&r);
        assert!(rotated.size().x > 1.0);
        assert!((rotated.size().y - 1.0).abs() < 1e-5);
    }
}
