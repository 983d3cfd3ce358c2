//! Renderer constants

/// Viewport and render-target settings.
pub mod viewport {
    /// MSAA sample count for all pipelines and render targets.
    pub const SAMPLE_COUNT: u32 = 4;
}

/// Ground grid defaults.
pub mod grid {
    /// Half-extent of the grid in world units.
    pub const DEFAULT_SIZE: f32 = 10.0;
    /// Spacing between grid lines.
    pub const DEFAULT_SPACING: f32 = 1.0;
    pub const LINE_COLOR: [f32; 3] = [0.32, 0.32, 0.34];
    pub const X_AXIS_COLOR: [f32; 3] = [0.75, 0.25, 0.25];
    pub const Z_AXIS_COLOR: [f32; 3] = [0.25, 0.35, 0.8];
}

/// Transform gizmo sizing.
pub mod gizmo {
    /// Screen-size factor: gizmo world scale = camera distance * this.
    pub const DISTANCE_SCALE: f32 = 0.15;
    /// Hit-test tolerance as a fraction of the gizmo scale.
    pub const PICK_TOLERANCE: f32 = 0.12;
    /// Segments per rotation ring.
    pub const RING_SEGMENTS: u32 = 48;
}
