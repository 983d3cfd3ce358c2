//! Parameter panel snapshot
//!
//! `ShapeParams` mirrors the add-shape panel: geometry kind, material, the
//! three fixed light configurations and the placement coordinates. The add
//! action snapshots it into a new record; re-clicking a placed shape restyles
//! that record from the values current at click time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::shape::{GeometryKind, LightRecord, ShapeRecord};

/// Current values of the add-shape parameter panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub kind: GeometryKind,
    pub color: [f32; 3],
    pub roughness: f32,
    pub ambient_intensity: f32,
    pub ambient_color: [f32; 3],
    pub spot_intensity: f32,
    pub spot_position: Vec3,
    pub spot_angle: f32,
    pub point_intensity: f32,
    pub point_position: Vec3,
    pub position: Vec3,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            kind: GeometryKind::Box,
            color: [1.0, 0.0, 0.0],
            roughness: 1.0,
            ambient_intensity: 1.0,
            ambient_color: [1.0, 1.0, 1.0],
            spot_intensity: 1.0,
            spot_position: Vec3::new(10.0, 10.0, -10.0),
            spot_angle: 0.15,
            point_intensity: 1.0,
            point_position: Vec3::new(-10.0, -10.0, 10.0),
            position: Vec3::new(2.0, 2.0, 0.0),
        }
    }
}

impl ShapeParams {
    /// Range of the placement sliders.
    pub const POSITION_MIN: f32 = -10.0;
    pub const POSITION_MAX: f32 = 10.0;

    /// The three light records, always in ambient, spot, point order.
    pub fn lights(&self) -> Vec<LightRecord> {
        vec![
            LightRecord::Ambient {
                intensity: self.ambient_intensity,
                color: self.ambient_color,
            },
            LightRecord::Spot {
                intensity: self.spot_intensity,
                position: self.spot_position,
                angle: self.spot_angle,
            },
            LightRecord::Point {
                intensity: self.point_intensity,
                position: self.point_position,
            },
        ]
    }

    /// Snapshot the current panel values into a new shape record.
    pub fn make_record(&self) -> ShapeRecord {
        ShapeRecord::new(
            self.kind,
            self.color,
            self.roughness,
            self.position,
            self.lights(),
        )
    }

    /// Refresh a clicked shape's appearance from the current panel values.
    ///
    /// Kind and position stay as placed; only color, roughness and the light
    /// set are overwritten.
    pub fn restyle(&self, record: &mut ShapeRecord) {
        record.color = self.color;
        record.roughness = self.roughness;
        record.lights = self.lights();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::LightKind;

    #[test]
    fn make_record_snapshots_panel_values() {
        let params = ShapeParams {
            kind: GeometryKind::Sphere,
            color: [0.0, 1.0, 0.0],
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };

        let record = params.make_record();
        assert_eq!(record.kind, GeometryKind::Sphere);
        assert_eq!(record.color, [0.0, 1.0, 0.0]);
        assert_eq!(record.position, Vec3::new(1.0, 2.0, 3.0));

        let kinds: Vec<LightKind> = record.lights.iter().map(|l| l.kind()).collect();
        assert_eq!(
            kinds,
            vec![LightKind::Ambient, LightKind::Spot, LightKind::Point]
        );
    }

    #[test]
    fn restyle_keeps_kind_and_position() {
        let params = ShapeParams::default();
        let mut record = params.make_record();
        let placed_at = record.position;

        let edited = ShapeParams {
            color: [0.2, 0.4, 0.6],
            roughness: 0.25,
            ambient_intensity: 3.0,
            position: Vec3::new(-5.0, 0.0, 5.0),
            ..Default::default()
        };
        edited.restyle(&mut record);

        assert_eq!(record.color, [0.2, 0.4, 0.6]);
        assert_eq!(record.roughness, 0.25);
        assert_eq!(record.lights[0].intensity(), 3.0);
        // Placement and kind are not panel-editable after the fact.
        assert_eq!(record.position, placed_at);
        assert_eq!(record.kind, GeometryKind::Box);
    }
}
