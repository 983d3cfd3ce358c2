//! Gizmo drag handling.
//!
//! A drag starts when the pointer goes down on a gizmo axis and ends on
//! release. Each frame the current pointer ray is converted into a delta
//! relative to the drag start: a distance along the axis (translate, scale) or
//! an angle around it (rotate).

use glam::{Mat4, Quat, Vec3};

use shapelab_core::ShapeParams;
use shapelab_renderer::{GizmoAxis, GizmoMode};

/// An in-progress gizmo drag.
pub struct GizmoDrag {
    pub axis: GizmoAxis,
    pub mode: GizmoMode,
    origin: Vec3,
    axis_dir: Vec3,
    start_param: f32,
    start_angle: f32,
    start_position: Vec3,
    start_transform: Mat4,
}

impl GizmoDrag {
    /// Starts a drag from the pointer ray that hit the given axis.
    ///
    /// `origin` is the gizmo position, `transform` and `position` are the
    /// selected shape's transform and record position at drag start.
    pub fn begin(
        axis: GizmoAxis,
        mode: GizmoMode,
        origin: Vec3,
        transform: Mat4,
        position: Vec3,
        ray_origin: Vec3,
        ray_dir: Vec3,
    ) -> Option<Self> {
        let axis_dir = axis.direction()?;
        let start_param = closest_axis_param(ray_origin, ray_dir, origin, axis_dir)?;
        let start_angle = ring_angle(ray_origin, ray_dir, origin, axis_dir).unwrap_or(0.0);

        Some(Self {
            axis,
            mode,
            origin,
            axis_dir,
            start_param,
            start_angle,
            start_position: position,
            start_transform: transform,
        })
    }

    /// New record position for a translate drag. Components stay within the
    /// placement range.
    pub fn translated_position(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Vec3> {
        let param = closest_axis_param(ray_origin, ray_dir, self.origin, self.axis_dir)?;
        let moved = self.start_position + self.axis_dir * (param - self.start_param);
        Some(moved.clamp(
            Vec3::splat(ShapeParams::POSITION_MIN),
            Vec3::splat(ShapeParams::POSITION_MAX),
        ))
    }

    /// New shape transform for a rotate drag.
    pub fn rotated_transform(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Mat4> {
        let angle = ring_angle(ray_origin, ray_dir, self.origin, self.axis_dir)?;
        let delta = angle - self.start_angle;

        let (scale, rotation, translation) = self.start_transform.to_scale_rotation_translation();
        let new_rotation = Quat::from_axis_angle(self.axis_dir, delta) * rotation;
        Some(Mat4::from_scale_rotation_translation(
            scale,
            new_rotation,
            translation,
        ))
    }

    /// New shape transform for a scale drag.
    pub fn scaled_transform(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Mat4> {
        let param = closest_axis_param(ray_origin, ray_dir, self.origin, self.axis_dir)?;
        if self.start_param.abs() < 1e-4 {
            return None;
        }
        let factor = (param / self.start_param).clamp(0.05, 50.0);

        let (mut scale, rotation, translation) = self.start_transform.to_scale_rotation_translation();
        match self.axis {
            GizmoAxis::X => scale.x *= factor,
            GizmoAxis::Y => scale.y *= factor,
            GizmoAxis::Z => scale.z *= factor,
            GizmoAxis::None => return None,
        }
        Some(Mat4::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }
}

/// Parameter along the axis line closest to the pointer ray.
fn closest_axis_param(ray_origin: Vec3, ray_dir: Vec3, origin: Vec3, axis_dir: Vec3) -> Option<f32> {
    let w = ray_origin - origin;

    let a = ray_dir.dot(ray_dir);
    let b = ray_dir.dot(axis_dir);
    let c = axis_dir.dot(axis_dir);
    let d = ray_dir.dot(w);
    let e = axis_dir.dot(w);

    let denom = a * c - b * b;
    if denom.abs() < 1e-8 {
        // Ray is parallel to the axis; no stable parameter.
        return None;
    }
    Some((a * e - b * d) / denom)
}

/// Angle of the pointer ray's hit point in the ring's plane.
fn ring_angle(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, normal: Vec3) -> Option<f32> {
    let denom = ray_dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray_origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t - center;

    let helper = if normal.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
    let u = normal.cross(helper).normalize();
    let v = normal.cross(u);
    Some(hit.dot(v).atan2(hit.dot(u)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_at(x: f32, y: f32) -> (Vec3, Vec3) {
        (Vec3::new(x, y, 5.0), Vec3::NEG_Z)
    }

    #[test]
    fn translate_moves_along_axis_only() {
        let (o0, d0) = ray_at(0.5, 0.0);
        let drag = GizmoDrag::begin(
            GizmoAxis::X,
            GizmoMode::Translate,
            Vec3::ZERO,
            Mat4::IDENTITY,
            Vec3::ZERO,
            o0,
            d0,
        )
        .unwrap();

        let (o1, d1) = ray_at(2.5, 0.0);
        let moved = drag.translated_position(o1, d1).unwrap();
        assert!((moved.x - 2.0).abs() < 1e-4);
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.z, 0.0);
    }

    #[test]
    fn translate_is_clamped_to_placement_range() {
        let (o0, d0) = ray_at(0.5, 0.0);
        let drag = GizmoDrag::begin(
            GizmoAxis::X,
            GizmoMode::Translate,
            Vec3::ZERO,
            Mat4::IDENTITY,
            Vec3::new(9.0, 0.0, 0.0),
            o0,
            d0,
        )
        .unwrap();

        let (o1, d1) = ray_at(8.0, 0.0);
        let moved = drag.translated_position(o1, d1).unwrap();
        assert_eq!(moved.x, ShapeParams::POSITION_MAX);
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let (o0, d0) = ray_at(1.0, 0.0);
        let drag = GizmoDrag::begin(
            GizmoAxis::Z,
            GizmoMode::Rotate,
            Vec3::ZERO,
            Mat4::IDENTITY,
            Vec3::ZERO,
            o0,
            d0,
        )
        .unwrap();

        let (o1, d1) = ray_at(0.0, 1.0);
        let rotated = drag.rotated_transform(o1, d1).unwrap();
        let (_, rotation, _) = rotated.to_scale_rotation_translation();
        let (axis, angle) = rotation.to_axis_angle();
        assert!((angle.abs() - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
        assert!((axis.dot(Vec3::Z)).abs() > 0.999);
    }

    #[test]
    fn scale_doubles_along_dragged_axis() {
        let (o0, d0) = ray_at(0.0, 1.0);
        let drag = GizmoDrag::begin(
            GizmoAxis::Y,
            GizmoMode::Scale,
            Vec3::ZERO,
            Mat4::IDENTITY,
            Vec3::ZERO,
            o0,
            d0,
        )
        .unwrap();

        let (o1, d1) = ray_at(0.0, 2.0);
        let scaled = drag.scaled_transform(o1, d1).unwrap();
        let (scale, _, _) = scaled.to_scale_rotation_translation();
        assert!((scale.y - 2.0).abs() < 1e-3);
        assert!((scale.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn parallel_ray_yields_no_param() {
        assert!(closest_axis_param(Vec3::new(0.0, 1.0, 0.0), Vec3::X, Vec3::ZERO, Vec3::X).is_none());
    }
}
