//! Per-shape light data, packed for the GPU.

use bytemuck::{Pod, Zeroable};
use shapelab_core::LightRecord;

/// The three lights carried by every shape, in std140-friendly layout.
///
/// Light positions are in the shape's local space; the shader moves them with
/// the shape's model matrix so the rig travels with the shape. The spot light
/// always aims at the shape's origin.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShapeLightsUniform {
    /// Ambient color (rgb) and intensity (w).
    pub ambient: [f32; 4],
    /// Spot position (xyz) and intensity (w).
    pub spot_position: [f32; 4],
    /// Cosine of the spot cone half-angle (x); yzw unused.
    pub spot_cone: [f32; 4],
    /// Point position (xyz) and intensity (w).
    pub point_position: [f32; 4],
}

impl Default for ShapeLightsUniform {
    fn default() -> Self {
        Self {
            ambient: [1.0, 1.0, 1.0, 1.0],
            spot_position: [10.0, 10.0, -10.0, 1.0],
            spot_cone: [0.15f32.cos(), 0.0, 0.0, 0.0],
            point_position: [-10.0, -10.0, 10.0, 1.0],
        }
    }
}

impl ShapeLightsUniform {
    /// Packs a shape's light records. Records of the same kind overwrite each
    /// other; missing kinds keep the defaults.
    pub fn from_records(records: &[LightRecord]) -> Self {
        let mut out = Self::default();
        for record in records {
            match *record {
                LightRecord::Ambient { intensity, color } => {
                    out.ambient = [color[0], color[1], color[2], intensity];
                }
                LightRecord::Spot {
                    intensity,
                    position,
                    angle,
                } => {
                    out.spot_position = [position.x, position.y, position.z, intensity];
                    out.spot_cone = [angle.cos(), 0.0, 0.0, 0.0];
                }
                LightRecord::Point {
                    intensity,
                    position,
                } => {
                    out.point_position = [position.x, position.y, position.z, intensity];
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use shapelab_core::ShapeParams;

    #[test]
    fn default_matches_panel_defaults() {
        let from_panel = ShapeLightsUniform::from_records(&ShapeParams::default().lights());
        assert_eq!(from_panel, ShapeLightsUniform::default());
    }

    #[test]
    fn packs_each_light_kind() {
        let records = vec![
            LightRecord::Ambient {
                intensity: 0.5,
                color: [0.2, 0.4, 0.6],
            },
            LightRecord::Spot {
                intensity: 2.0,
                position: Vec3::new(1.0, 2.0, 3.0),
                angle: 0.3,
            },
            LightRecord::Point {
                intensity: 3.0,
                position: Vec3::new(-1.0, -2.0, -3.0),
            },
        ];
        let packed = ShapeLightsUniform::from_records(&records);
        assert_eq!(packed.ambient, [0.2, 0.4, 0.6, 0.5]);
        assert_eq!(packed.spot_position, [1.0, 2.0, 3.0, 2.0]);
        assert!((packed.spot_cone[0] - 0.3f32.cos()).abs() < 1e-6);
        assert_eq!(packed.point_position, [-1.0, -2.0, -3.0, 3.0]);
    }

    #[test]
    fn empty_records_keep_defaults() {
        assert_eq!(
            ShapeLightsUniform::from_records(&[]),
            ShapeLightsUniform::default()
        );
    }
}
