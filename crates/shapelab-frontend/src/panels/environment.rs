//! Environment panel

use shapelab_renderer::EnvPreset;

use crate::app_state::SharedAppState;
use crate::panels::Panel;

/// Environment preset and blur controls.
pub struct EnvironmentPanel;

impl EnvironmentPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvironmentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for EnvironmentPanel {
    fn name(&self) -> &str {
        "Environment"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut state = app_state.lock();

        ui.heading("Environment");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Preset:");
            egui::ComboBox::from_id_salt("env_preset")
                .selected_text(state.environment.preset.label())
                .show_ui(ui, |ui| {
                    for preset in EnvPreset::ALL {
                        ui.selectable_value(&mut state.environment.preset, preset, preset.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Blur:");
            ui.add(egui::Slider::new(&mut state.environment.blur, 0.0..=1.0));
        });
    }
}
