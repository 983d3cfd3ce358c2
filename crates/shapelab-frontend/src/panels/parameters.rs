//! Shape parameter panel
//!
//! Edits the parameters used for the next placed shape: geometry kind,
//! material, the three lights and the placement position. Clicking a placed
//! shape restyles it from whatever this panel currently holds.

use shapelab_core::{GeometryKind, ShapeParams};

use crate::app_state::SharedAppState;
use crate::panels::Panel;

/// Parameter panel for the next shape.
pub struct ParametersPanel;

impl ParametersPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParametersPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ParametersPanel {
    fn name(&self) -> &str {
        "Shape"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut state = app_state.lock();

        ui.heading("Shape");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Geometry:");
            egui::ComboBox::from_id_salt("geometry_kind")
                .selected_text(state.params.kind.label())
                .show_ui(ui, |ui| {
                    for kind in GeometryKind::ALL {
                        ui.selectable_value(&mut state.params.kind, kind, kind.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Color:");
            ui.color_edit_button_rgb(&mut state.params.color);
        });

        ui.horizontal(|ui| {
            ui.label("Roughness:");
            ui.add(egui::Slider::new(&mut state.params.roughness, 0.0..=1.0));
        });

        ui.separator();
        ui.heading("Lights");

        ui.collapsing("Ambient", |ui| {
            ui.horizontal(|ui| {
                ui.label("Intensity:");
                ui.add(
                    egui::DragValue::new(&mut state.params.ambient_intensity)
                        .speed(0.05)
                        .range(0.0..=10.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Color:");
                ui.color_edit_button_rgb(&mut state.params.ambient_color);
            });
        });

        ui.collapsing("Spot", |ui| {
            ui.horizontal(|ui| {
                ui.label("Intensity:");
                ui.add(
                    egui::DragValue::new(&mut state.params.spot_intensity)
                        .speed(0.05)
                        .range(0.0..=10.0),
                );
            });
            vec3_row(ui, "Position:", &mut state.params.spot_position);
            ui.horizontal(|ui| {
                ui.label("Angle:");
                ui.add(egui::Slider::new(&mut state.params.spot_angle, 0.01..=1.0));
            });
        });

        ui.collapsing("Point", |ui| {
            ui.horizontal(|ui| {
                ui.label("Intensity:");
                ui.add(
                    egui::DragValue::new(&mut state.params.point_intensity)
                        .speed(0.05)
                        .range(0.0..=10.0),
                );
            });
            vec3_row(ui, "Position:", &mut state.params.point_position);
        });

        ui.separator();
        ui.heading("Position");

        let range = ShapeParams::POSITION_MIN..=ShapeParams::POSITION_MAX;
        ui.add(egui::Slider::new(&mut state.params.position.x, range.clone()).text("X"));
        ui.add(egui::Slider::new(&mut state.params.position.y, range.clone()).text("Y"));
        ui.add(egui::Slider::new(&mut state.params.position.z, range).text("Z"));

        ui.separator();

        if ui.button("Add Shape").clicked() {
            let record = state.params.make_record();
            let id = state.store.push(record);
            tracing::debug!(%id, kind = state.params.kind.label(), "added shape");
        }

        ui.weak(format!("{} shape(s) placed", state.store.len()));
    }
}

fn vec3_row(ui: &mut egui::Ui, label: &str, value: &mut glam::Vec3) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(&mut value.x).speed(0.1).prefix("x: "));
        ui.add(egui::DragValue::new(&mut value.y).speed(0.1).prefix("y: "));
        ui.add(egui::DragValue::new(&mut value.z).speed(0.1).prefix("z: "));
    });
}
