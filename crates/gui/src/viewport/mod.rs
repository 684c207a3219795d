//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
mod overlays;
mod renderer;
pub use boxtrude_gui_lib::viewport::{camera, mesh, scene, service};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, ClickOutcome};
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use service::ViewportService;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self { gl_renderer: None }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using wireframe fallback: {e}"),
        }
    }

    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(state: &mut AppState) {
        state.extrusion.viewport_mut().camera = ArcBallCamera::new();
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );
        state.extrusion.viewport_mut().resize(rect);

        self.handle_camera(&response, ui, state);

        // ── Select / commit on primary click ────────────────────
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let outcome = state.extrusion.on_pointer_click(pos);
                report_click(state, &outcome);
            }
        }

        // ── Preview loop: reschedules itself while a face is armed ──
        if state.extrusion.is_previewing() {
            state.extrusion.on_frame(response.hover_pos());
            ui.ctx().request_repaint();
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, state);
        self.draw_overlays(ui, rect, state);
    }

    fn handle_camera(&self, response: &egui::Response, ui: &Ui, state: &mut AppState) {
        let camera = &mut state.extrusion.viewport_mut().camera;

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            camera.pan(-delta.x * 0.01, delta.y * 0.01);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                camera.zoom(scroll * 0.01);
            }
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // Fallback: software wireframe rendering
            renderer::paint_viewport(ui, rect, state);
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let scene = state.extrusion.viewport();
        let camera = scene.camera;
        let meshes = scene.snapshot();
        let version = scene.version();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_from_meshes(gl, &meshes, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);
        let camera = &state.extrusion.viewport().camera;

        if state.settings.axes.visible && state.settings.axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, camera, state.settings.axes.length);
        }

        overlays::draw_camera_info(&painter, rect, camera);

        if state.extrusion.is_previewing() {
            overlays::draw_drag_dimension(&painter, rect, camera, state);
        }
    }
}

/// Log a click outcome and surface it in the status bar
fn report_click(state: &mut AppState, outcome: &ClickOutcome) {
    let event = match outcome {
        ClickOutcome::Ignored => return,
        ClickOutcome::FaceSelected(axis) => {
            format!("{} ({})", t("event.face_selected"), axis.label())
        }
        ClickOutcome::Rejected(e) => format!("{}: {e}", t("event.rejected")),
        ClickOutcome::Committed(d) => format!(
            "{}: {:.2} × {:.2} × {:.2}",
            t("event.committed"),
            d.width,
            d.height,
            d.depth
        ),
        ClickOutcome::Missed => t("event.missed").to_string(),
        ClickOutcome::Cancelled => t("event.cancelled").to_string(),
    };
    state.last_event = Some(event);
}
