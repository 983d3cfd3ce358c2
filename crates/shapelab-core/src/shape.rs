//! Shape and light record definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primitive geometry kinds offered by the parameter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Sphere,
    Plane,
    #[default]
    Box,
    Cylinder,
}

impl GeometryKind {
    /// All kinds, in the panel's option order.
    pub const ALL: [GeometryKind; 4] = [
        GeometryKind::Sphere,
        GeometryKind::Plane,
        GeometryKind::Box,
        GeometryKind::Cylinder,
    ];

    /// Resolve a panel option name. Unknown names yield `None`; the caller
    /// renders nothing for them.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sphere" => Some(GeometryKind::Sphere),
            "plane" => Some(GeometryKind::Plane),
            "box" => Some(GeometryKind::Box),
            "cylinder" => Some(GeometryKind::Cylinder),
            _ => None,
        }
    }

    /// Display label for the panel's option list.
    pub fn label(&self) -> &'static str {
        match self {
            GeometryKind::Sphere => "sphere",
            GeometryKind::Plane => "plane",
            GeometryKind::Box => "box",
            GeometryKind::Cylinder => "cylinder",
        }
    }
}

/// Kind tag for a light record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    Ambient,
    Spot,
    Point,
}

/// One light source attached to a shape.
///
/// Ambient lights carry a color, spot lights a position and cone angle, point
/// lights a position only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LightRecord {
    Ambient {
        intensity: f32,
        color: [f32; 3],
    },
    Spot {
        intensity: f32,
        position: Vec3,
        /// Cone half-angle in radians.
        angle: f32,
    },
    Point {
        intensity: f32,
        position: Vec3,
    },
}

impl LightRecord {
    pub fn kind(&self) -> LightKind {
        match self {
            LightRecord::Ambient { .. } => LightKind::Ambient,
            LightRecord::Spot { .. } => LightKind::Spot,
            LightRecord::Point { .. } => LightKind::Point,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            LightRecord::Ambient { intensity, .. }
            | LightRecord::Spot { intensity, .. }
            | LightRecord::Point { intensity, .. } => *intensity,
        }
    }
}

/// The persisted description of one placed primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: Uuid,
    pub kind: GeometryKind,
    /// Material base color (RGB, 0.0-1.0).
    pub color: [f32; 3],
    /// Material roughness in [0, 1].
    pub roughness: f32,
    /// Placement in world space; each component stays in [-10, 10].
    pub position: Vec3,
    /// Attached lights. Creation always yields three entries in ambient,
    /// spot, point order.
    pub lights: Vec<LightRecord>,
}

impl ShapeRecord {
    /// Create a new record with a fresh identity.
    pub fn new(
        kind: GeometryKind,
        color: [f32; 3],
        roughness: f32,
        position: Vec3,
        lights: Vec<LightRecord>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            color,
            roughness,
            position,
            lights,
        }
    }
}
