//! Main application

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use shapelab_renderer::{GizmoAxis, GizmoMode, gizmo_hit_test};

use crate::app_state::{AppState, SharedAppState};
use crate::config::ConfigManager;
use crate::gizmo_interaction::GizmoDrag;
use crate::panels::{EnvironmentPanel, Panel, ParametersPanel};
use crate::picking::pick_shape;
use crate::viewport_state::{SharedViewportState, ViewportState};

/// The Shapelab application.
pub struct ShapeLabApp {
    state: SharedAppState,
    viewport: SharedViewportState,
    panels: Vec<Box<dyn Panel>>,
    config: ConfigManager,
    render_state: egui_wgpu::RenderState,
    gizmo_drag: Option<GizmoDrag>,
}

impl ShapeLabApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let render_state = cc
            .wgpu_render_state
            .as_ref()
            .expect("wgpu render state is required")
            .clone();

        let viewport = ViewportState::new(
            render_state.device.clone(),
            render_state.queue.clone(),
            render_state.target_format,
        );

        let config = ConfigManager::new();
        let mut state = AppState::new();
        state.environment = config.config().environment;

        Self {
            state: Arc::new(Mutex::new(state)),
            viewport: Arc::new(Mutex::new(viewport)),
            panels: vec![
                Box::new(ParametersPanel::new()),
                Box::new(EnvironmentPanel::new()),
            ],
            config,
            render_state,
            gizmo_drag: None,
        }
    }

    fn gizmo_toolbar(&self, ui: &mut egui::Ui) {
        let mut state = self.state.lock();
        ui.horizontal(|ui| {
            for mode in [GizmoMode::Translate, GizmoMode::Rotate, GizmoMode::Scale] {
                if ui
                    .selectable_label(state.gizmo_mode == mode, mode.label())
                    .clicked()
                {
                    state.gizmo_mode = mode;
                }
            }
        });
    }

    fn handle_shortcuts(&self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let mut state = self.state.lock();
        ctx.input(|i| {
            if i.key_pressed(egui::Key::T) {
                state.gizmo_mode = GizmoMode::Translate;
            }
            if i.key_pressed(egui::Key::R) {
                state.gizmo_mode = GizmoMode::Rotate;
            }
            if i.key_pressed(egui::Key::S) {
                state.gizmo_mode = GizmoMode::Scale;
            }
        });
    }

    fn viewport_ui(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let width = size.x.max(1.0) as u32;
        let height = size.y.max(1.0) as u32;

        let mut viewport = self.viewport.lock();

        let texture_id = {
            let mut egui_renderer = self.render_state.renderer.write();
            viewport.ensure_texture(width, height, &mut egui_renderer)
        };

        let texture = egui::load::SizedTexture::new(texture_id, size);
        let response = ui.add(egui::Image::new(texture).sense(egui::Sense::click_and_drag()));

        let mut state = self.state.lock();
        handle_viewport_input(
            ui,
            &response,
            &mut viewport,
            &mut state,
            &mut self.gizmo_drag,
        );
        viewport.sync_scene(&mut state);
        drop(state);

        viewport.render();
    }
}

/// Pointer handling for the 3D viewport.
///
/// Input priority: an active gizmo drag wins, then a fresh gizmo axis hit,
/// then shape picking, then camera controls. A click on a placed shape
/// restyles it from the current panel values and selects it; a background
/// click clears the selection.
fn handle_viewport_input(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport: &mut ViewportState,
    state: &mut AppState,
    gizmo_drag: &mut Option<GizmoDrag>,
) {
    let rect = response.rect;

    let Some(pointer) = response.hover_pos() else {
        if response.drag_stopped() {
            *gizmo_drag = None;
        }
        return;
    };

    let local = pointer - rect.min;
    let (ray_origin, ray_dir) = viewport.renderer.camera().screen_to_ray(
        local.x,
        local.y,
        rect.width(),
        rect.height(),
    );

    // The gizmo draws on top and wins input.
    let mut gizmo_axis = GizmoAxis::None;
    if gizmo_drag.is_none()
        && let Some(object) = viewport.renderer.scene().selected_object()
    {
        let position = object.transform.to_scale_rotation_translation().2;
        let scale = viewport.renderer.scene().gizmo().scale;
        if scale > 0.0 {
            gizmo_axis = gizmo_hit_test(ray_origin, ray_dir, position, scale, state.gizmo_mode);
        }
    }
    if let Some(drag) = gizmo_drag.as_ref() {
        gizmo_axis = drag.axis;
    }
    viewport.renderer.scene_mut().gizmo_mut().highlight = gizmo_axis;

    // Hover pick, suppressed while the gizmo has the pointer.
    let hovered = if gizmo_axis == GizmoAxis::None && gizmo_drag.is_none() {
        let pickables = viewport.pickables(state);
        pick_shape(ray_origin, ray_dir, &pickables).map(|(id, _)| id)
    } else {
        None
    };
    viewport.renderer.scene_mut().set_hovered(hovered);

    if hovered.is_some() || gizmo_axis != GizmoAxis::None {
        ui.ctx()
            .output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
    }

    if response.drag_started_by(egui::PointerButton::Primary)
        && gizmo_axis != GizmoAxis::None
        && let Some(object) = viewport.renderer.scene().selected_object()
        && let Some(record) = state.store.selected_record()
    {
        let origin = object.transform.to_scale_rotation_translation().2;
        *gizmo_drag = GizmoDrag::begin(
            gizmo_axis,
            state.gizmo_mode,
            origin,
            object.transform,
            record.position,
            ray_origin,
            ray_dir,
        );
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(drag) = gizmo_drag.as_ref() {
            apply_gizmo_drag(drag, ray_origin, ray_dir, viewport, state);
        } else {
            // Orbit the camera.
            let delta = response.drag_delta();
            viewport
                .renderer
                .camera_mut()
                .orbit(delta.x * 0.01, delta.y * 0.01);
        }
    }

    if response.drag_stopped() {
        *gizmo_drag = None;
    }

    if response.clicked() {
        let pickables = viewport.pickables(state);
        if let Some((id, _)) = pick_shape(ray_origin, ray_dir, &pickables) {
            // Restyle the clicked shape from the current panel values, then
            // select it.
            if let Some(index) = state.store.index_of(id)
                && let Some(record) = state.store.get(index)
            {
                let mut record = record.clone();
                state.params.restyle(&mut record);
                state.store.replace(index, record);
            }
            state.store.set_selected(Some(id));
        } else if gizmo_axis == GizmoAxis::None {
            // Background click clears the selection.
            state.store.set_selected(None);
        }
    }

    // Scroll zoom while the pointer is over the viewport.
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll != 0.0 {
        viewport.renderer.camera_mut().zoom(scroll * 0.01);
    }
}

fn apply_gizmo_drag(
    drag: &GizmoDrag,
    ray_origin: glam::Vec3,
    ray_dir: glam::Vec3,
    viewport: &mut ViewportState,
    state: &mut AppState,
) {
    let Some(id) = state.store.selected() else {
        return;
    };

    match drag.mode {
        GizmoMode::Translate => {
            // Placement lives in the record; the scene follows on sync.
            if let Some(position) = drag.translated_position(ray_origin, ray_dir)
                && let Some(index) = state.store.index_of(id)
                && let Some(record) = state.store.get(index)
            {
                let mut record = record.clone();
                record.position = position;
                state.store.replace(index, record);
            }
        }
        GizmoMode::Rotate => {
            if let Some(transform) = drag.rotated_transform(ray_origin, ray_dir)
                && let Some(object) = viewport.renderer.scene_mut().get_mut(id)
            {
                object.transform = transform;
            }
        }
        GizmoMode::Scale => {
            if let Some(transform) = drag.scaled_transform(ray_origin, ray_dir)
                && let Some(object) = viewport.renderer.scene_mut().get_mut(id)
            {
                object.transform = transform;
            }
        }
    }
}

impl eframe::App for ShapeLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::SidePanel::left("side_panel")
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let state = self.state.clone();
                    for panel in &mut self.panels {
                        panel.ui(ui, &state);
                        ui.separator();
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.gizmo_toolbar(ui);
                self.viewport_ui(ui);
            });

        // The viewport animates with camera motion; keep frames coming.
        ctx.request_repaint();
    }

    fn on_exit(&mut self) {
        let environment = self.state.lock().environment;
        if self.config.config().environment != environment {
            self.config.config_mut().environment = environment;
        }
        if let Err(e) = self.config.save() {
            warn!("failed to save config: {e}");
        }
    }
}
