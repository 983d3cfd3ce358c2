//! Environment presets.
//!
//! Each preset supplies a background clear color and an ambient tint that the
//! shape pass folds into the ambient light term. Blur softens the background
//! toward a neutral grey.

use serde::{Deserialize, Serialize};

/// Named environment preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvPreset {
    #[default]
    Sunset,
    Dawn,
    Night,
    Warehouse,
    Forest,
    Apartment,
    Studio,
    City,
    Park,
    Lobby,
}

impl EnvPreset {
    pub const ALL: [EnvPreset; 10] = [
        EnvPreset::Sunset,
        EnvPreset::Dawn,
        EnvPreset::Night,
        EnvPreset::Warehouse,
        EnvPreset::Forest,
        EnvPreset::Apartment,
        EnvPreset::Studio,
        EnvPreset::City,
        EnvPreset::Park,
        EnvPreset::Lobby,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnvPreset::Sunset => "sunset",
            EnvPreset::Dawn => "dawn",
            EnvPreset::Night => "night",
            EnvPreset::Warehouse => "warehouse",
            EnvPreset::Forest => "forest",
            EnvPreset::Apartment => "apartment",
            EnvPreset::Studio => "studio",
            EnvPreset::City => "city",
            EnvPreset::Park => "park",
            EnvPreset::Lobby => "lobby",
        }
    }

    /// Background color in linear RGB.
    pub fn background(&self) -> [f32; 3] {
        match self {
            EnvPreset::Sunset => [0.45, 0.22, 0.12],
            EnvPreset::Dawn => [0.35, 0.30, 0.38],
            EnvPreset::Night => [0.02, 0.03, 0.07],
            EnvPreset::Warehouse => [0.18, 0.18, 0.17],
            EnvPreset::Forest => [0.08, 0.16, 0.09],
            EnvPreset::Apartment => [0.28, 0.24, 0.20],
            EnvPreset::Studio => [0.35, 0.35, 0.35],
            EnvPreset::City => [0.15, 0.17, 0.22],
            EnvPreset::Park => [0.20, 0.30, 0.18],
            EnvPreset::Lobby => [0.30, 0.26, 0.18],
        }
    }

    /// Tint applied to the ambient light term.
    pub fn ambient_tint(&self) -> [f32; 3] {
        match self {
            EnvPreset::Sunset => [1.05, 0.92, 0.80],
            EnvPreset::Dawn => [0.95, 0.92, 1.02],
            EnvPreset::Night => [0.55, 0.60, 0.80],
            EnvPreset::Warehouse => [0.95, 0.95, 0.92],
            EnvPreset::Forest => [0.85, 1.00, 0.85],
            EnvPreset::Apartment => [1.00, 0.96, 0.90],
            EnvPreset::Studio => [1.00, 1.00, 1.00],
            EnvPreset::City => [0.90, 0.93, 1.00],
            EnvPreset::Park => [0.92, 1.00, 0.90],
            EnvPreset::Lobby => [1.02, 0.96, 0.85],
        }
    }
}

/// Environment settings: preset plus background blur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub preset: EnvPreset,
    /// 0 = sharp preset color, 1 = fully washed toward neutral grey.
    pub blur: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            preset: EnvPreset::Sunset,
            blur: 0.65,
        }
    }
}

impl Environment {
    /// Clear color for the render pass, with blur blended toward grey.
    pub fn background_color(&self) -> wgpu::Color {
        let [r, g, b] = self.preset.background();
        let t = self.blur.clamp(0.0, 1.0) * 0.5;
        let grey = 0.25;
        wgpu::Color {
            r: (r + (grey - r) * t) as f64,
            g: (g + (grey - g) * t) as f64,
            b: (b + (grey - b) * t) as f64,
            a: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_a_distinct_label() {
        let mut labels: Vec<&str> = EnvPreset::ALL.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), EnvPreset::ALL.len());
    }

    #[test]
    fn blur_pulls_background_toward_grey() {
        let sharp = Environment {
            preset: EnvPreset::Night,
            blur: 0.0,
        };
        let soft = Environment {
            preset: EnvPreset::Night,
            blur: 1.0,
        };
        assert!(soft.background_color().r > sharp.background_color().r);
    }

    #[test]
    fn preset_names_round_trip_through_serde() {
        let ron = ron::to_string(&EnvPreset::Warehouse).unwrap();
        assert_eq!(ron, "warehouse");
        let back: EnvPreset = ron::from_str(&ron).unwrap();
        assert_eq!(back, EnvPreset::Warehouse);
    }
}
