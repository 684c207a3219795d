//! Headless test harness for driving the extrusion tool programmatically.
//!
//! Wires a real [`SceneViewport`] (camera, picking, mesh store) under the
//! controller. Clicks and hovers are given as world points and projected to
//! the screen with the live camera, so tests exercise the full pick path.

use glam::Vec3;
use shared::BoxDimensions;

use crate::state::extrusion::{ClickOutcome, ExtrusionController, InteractionMode, KeyOutcome};
use crate::state::settings::ExtrusionSettings;
use crate::validation::MeshValidator;
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::mesh::MeshData;
use crate::viewport::scene::{ScenePalette, SceneViewport};
use crate::viewport::service::{MeshStyle, ViewportService};

/// Viewport size used by the harness
pub const HARNESS_VIEWPORT: egui::Vec2 = egui::vec2(800.0, 600.0);

/// Headless test harness around one extrusion controller
pub struct TestHarness {
    pub controller: ExtrusionController<SceneViewport>,
    /// Pointer position fed to `frame`
    pointer: Option<egui::Pos2>,
}

impl TestHarness {
    /// Unit cube, default settings.
    pub fn new() -> Self {
        Self::with_settings(ExtrusionSettings::default(), BoxDimensions::UNIT)
    }

    pub fn with_settings(settings: ExtrusionSettings, initial: BoxDimensions) -> Self {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, HARNESS_VIEWPORT);
        let viewport = SceneViewport::new(rect, ScenePalette::default());
        Self {
            controller: ExtrusionController::new(viewport, settings, initial),
            pointer: None,
        }
    }

    // ── Input ─────────────────────────────────────────────────

    /// Screen position of a world point under the current camera
    pub fn screen_of(&self, world: Vec3) -> Option<egui::Pos2> {
        let vp = self.controller.viewport();
        vp.camera.project(world, vp.rect())
    }

    /// Click at a raw screen position
    pub fn click_screen(&mut self, pos: egui::Pos2) -> ClickOutcome {
        self.pointer = Some(pos);
        self.controller.on_pointer_click(pos)
    }

    /// Click over a world point. Points behind the camera click nothing.
    pub fn click_world(&mut self, world: Vec3) -> ClickOutcome {
        match self.screen_of(world) {
            Some(pos) => self.click_screen(pos),
            None => ClickOutcome::Ignored,
        }
    }

    /// Move the pointer over a world point without clicking
    pub fn hover_world(&mut self, world: Vec3) {
        self.pointer = self.screen_of(world);
    }

    /// Pointer left the viewport
    pub fn leave(&mut self) {
        self.pointer = None;
    }

    /// Run one display refresh
    pub fn frame(&mut self) -> Option<BoxDimensions> {
        self.controller.on_frame(self.pointer)
    }

    /// Hover over a world point and run one frame
    pub fn drag_to(&mut self, world: Vec3) -> Option<BoxDimensions> {
        self.hover_world(world);
        self.frame()
    }

    pub fn press_key(&mut self, key: egui::Key) -> KeyOutcome {
        self.controller.on_key_down(key)
    }

    /// Place the camera at `eye` looking at `target`
    pub fn look_from(&mut self, eye: Vec3, target: Vec3) {
        self.controller.viewport_mut().camera = ArcBallCamera::from_eye(eye, target);
    }

    /// Orbit the camera by a screen-space drag delta
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.controller.viewport_mut().camera.rotate(dx, dy);
    }

    pub fn resize(&mut self, size: egui::Vec2) {
        self.controller
            .viewport_mut()
            .resize(egui::Rect::from_min_size(egui::Pos2::ZERO, size));
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn dimensions(&self) -> BoxDimensions {
        self.controller.committed()
    }

    pub fn preview_dimensions(&self) -> Option<BoxDimensions> {
        self.controller.preview_dimensions()
    }

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn is_face_selected(&self) -> bool {
        self.controller.is_face_selected()
    }

    pub fn live_mesh_count(&self) -> usize {
        self.controller.viewport().mesh_count(None)
    }

    pub fn preview_count(&self) -> usize {
        self.controller.viewport().mesh_count(Some(MeshStyle::Preview))
    }

    pub fn solid_count(&self) -> usize {
        self.controller.viewport().mesh_count(Some(MeshStyle::Solid))
    }

    /// Mesh of the committed solid
    pub fn solid_mesh(&self) -> Option<&MeshData> {
        let handle = self.controller.solid();
        self.controller.viewport().mesh(handle).map(|m| &m.data)
    }

    /// Mesh of the live preview
    pub fn preview_mesh(&self) -> Option<&MeshData> {
        let handle = self.controller.preview()?;
        self.controller.viewport().mesh(handle).map(|m| &m.data)
    }

    pub fn validate_solid(&self) -> Option<MeshValidator<'_>> {
        self.solid_mesh().map(MeshValidator::new)
    }

    pub fn validate_preview(&self) -> Option<MeshValidator<'_>> {
        self.preview_mesh().map(MeshValidator::new)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_has_unit_cube() {
        let h = TestHarness::new();
        assert_eq!(h.dimensions(), BoxDimensions::UNIT);
        assert_eq!(h.solid_count(), 1);
        assert_eq!(h.preview_count(), 0);
    }

    #[test]
    fn test_click_empty_space_is_ignored() {
        let mut h = TestHarness::new();
        assert_eq!(h.click_screen(egui::pos2(2.0, 2.0)), ClickOutcome::Ignored);
        assert!(!h.is_face_selected());
    }

    #[test]
    fn test_frame_while_idle_builds_nothing() {
        let mut h = TestHarness::new();
        h.hover_world(Vec3::new(2.0, 0.5, 0.5));
        assert_eq!(h.frame(), None);
        assert_eq!(h.live_mesh_count(), 1);
    }

    #[test]
    fn test_validate_solid() {
        let h = TestHarness::new();
        let v = h.validate_solid().unwrap();
        assert!(v.validate_box().is_empty());
        assert!(v.assert_dimensions_approx(BoxDimensions::UNIT, 1e-5));
    }
}
