pub mod extrusion;
pub mod settings;

use shared::BoxDimensions;

use crate::viewport::scene::{ScenePalette, SceneViewport};
pub use extrusion::{ClickOutcome, ExtrusionController, InteractionMode, KeyOutcome};
pub use settings::{AppSettings, CommitMissPolicy};

/// Combined application state
pub struct AppState {
    pub extrusion: ExtrusionController<SceneViewport>,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Last user-facing event for the status bar
    pub last_event: Option<String>,
}

impl AppState {
    pub fn new(settings: AppSettings, initial: BoxDimensions) -> Self {
        // Resized to the real panel on the first frame
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let viewport = SceneViewport::new(rect, ScenePalette::from(&settings.viewport));
        Self {
            extrusion: ExtrusionController::new(viewport, settings.extrusion.clone(), initial),
            settings,
            show_settings_window: false,
            last_event: None,
        }
    }

    /// Push edited settings into the controller and the scene palette.
    /// Colors apply to meshes built from now on.
    pub fn apply_settings(&mut self) {
        self.extrusion.set_settings(self.settings.extrusion.clone());
        self.extrusion
            .viewport_mut()
            .set_palette(ScenePalette::from(&self.settings.viewport));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppSettings::default(), BoxDimensions::UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_settings_reaches_controller() {
        let mut state = AppState::default();
        state.settings.extrusion.commit_miss = CommitMissPolicy::CancelSelection;
        state.settings.viewport.preview_alpha = 0.25;
        state.apply_settings();

        assert_eq!(
            state.extrusion.settings().commit_miss,
            CommitMissPolicy::CancelSelection
        );
        assert_eq!(state.extrusion.viewport().palette().preview_alpha, 0.25);
    }
}
