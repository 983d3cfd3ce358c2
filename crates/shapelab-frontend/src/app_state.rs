//! Shared application state

use std::sync::Arc;

use parking_lot::Mutex;

use shapelab_core::{SceneStore, ShapeParams};
use shapelab_renderer::{Environment, GizmoMode};

/// Application state shared between panels and the viewport.
pub struct AppState {
    /// The placed shapes and the current selection.
    pub store: SceneStore,
    /// Current values of the add-shape parameter panel.
    pub params: ShapeParams,
    /// Active gizmo mode for the selected shape.
    pub gizmo_mode: GizmoMode,
    /// Background environment settings.
    pub environment: Environment,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: SceneStore::new(),
            params: ShapeParams::default(),
            gizmo_mode: GizmoMode::default(),
            environment: Environment::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;
