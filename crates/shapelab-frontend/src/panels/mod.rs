//! UI panels

mod environment;
mod parameters;

pub use environment::EnvironmentPanel;
pub use parameters::ParametersPanel;

use crate::app_state::SharedAppState;

/// A dockable UI panel.
pub trait Panel {
    /// Display name of the panel.
    fn name(&self) -> &str;

    /// Draws the panel contents.
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);
}
