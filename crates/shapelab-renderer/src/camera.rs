//! Orbit camera
//!
//! Yaw/pitch/distance orbit around a target point, Y-up. The defaults match
//! the editor's starting view: 75 degree vertical fov, eye five units out on
//! the +Z axis looking at the origin.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera uniform buffer data sent to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// World-space eye position (xyz, w unused).
    pub position: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 5.0, 0.0],
        }
    }
}

/// Orbit camera around a target point.
pub struct Camera {
    /// Orbit center.
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    const MIN_DISTANCE: f32 = 1.0;
    const MAX_DISTANCE: f32 = 60.0;
    const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

    /// Creates a camera with the given aspect ratio.
    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            // Eye on +Z, slightly elevated.
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.075,
            distance: 5.0,
            fov_y: 75.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 200.0,
        }
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + dir * self.distance
    }

    /// Orbits the camera by screen-space deltas (radians per unit).
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Pans the target in the camera's view plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let view = self.view_matrix();
        let right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        let scale = self.distance * 0.002;
        self.target += right * (-dx * scale) + up * (dy * scale);
    }

    /// Zooms by scroll delta (positive = closer).
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance * (1.0 - delta * 0.1)).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Current orbit distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Sets the vertical field of view in degrees.
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.fov_y = degrees.clamp(10.0, 150.0).to_radians();
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_y.to_degrees()
    }

    /// View matrix (right-handed, Y-up).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Projection matrix (wgpu 0..1 depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Uniform data for the GPU.
    pub fn uniform(&self) -> CameraUniform {
        let view_proj = self.projection_matrix() * self.view_matrix();
        let pos = self.position();
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            position: [pos.x, pos.y, pos.z, 0.0],
        }
    }

    /// Converts a screen position to a world-space ray (origin, direction).
    ///
    /// Screen coordinates are in pixels with the origin at the top-left of the
    /// viewport.
    pub fn screen_to_ray(&self, screen_x: f32, screen_y: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = 2.0 * screen_x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen_y / height;

        let inv_view_proj = (self.projection_matrix() * self.view_matrix()).inverse();
        let point = inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 0.5));

        let origin = self.position();
        let dir = (point - origin).normalize();
        (origin, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_is_in_front_of_origin() {
        let camera = Camera::new(16.0 / 9.0);
        let pos = camera.position();
        assert!(pos.z > 4.0, "eye should sit out on +Z, got {pos:?}");
        assert!(pos.x.abs() < 1e-4);
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::new(1.0);
        let (origin, dir) = camera.screen_to_ray(400.0, 300.0, 800.0, 600.0);
        let to_target = (camera.target - origin).normalize();
        assert!(dir.dot(to_target) > 0.999, "dir {dir:?} vs {to_target:?}");
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::new(1.0);
        camera.orbit(0.0, 10.0);
        let pos = camera.position();
        // Still below straight-up.
        assert!(pos.y < camera.distance());
        camera.orbit(0.0, -20.0);
        assert!(camera.position().y > -camera.distance());
    }

    #[test]
    fn zoom_respects_limits() {
        let mut camera = Camera::new(1.0);
        for _ in 0..100 {
            camera.zoom(1.0);
        }
        assert!(camera.distance() >= 1.0);
        for _ in 0..200 {
            camera.zoom(-1.0);
        }
        assert!(camera.distance() <= 60.0);
    }
}
