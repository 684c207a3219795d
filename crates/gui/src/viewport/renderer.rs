//! Wireframe rendering for the viewport when no GL context is available

use egui::{Color32, Rect, Stroke, Ui};
use glam::Vec3;

use super::camera::ArcBallCamera;
use super::mesh::MeshData;
use super::scene::SceneViewport;
use super::service::MeshStyle;
use crate::state::settings::{AxisSettings, GridSettings};
use crate::state::AppState;

/// Paint the 3D viewport using egui's painter (wireframe rendering)
pub fn paint_viewport(ui: &Ui, rect: Rect, state: &AppState) {
    let painter = ui.painter_at(rect);
    let scene: &SceneViewport = state.extrusion.viewport();
    let camera = &scene.camera;

    let bg = &state.settings.viewport.background_color;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(bg[0], bg[1], bg[2]));

    if state.settings.grid.visible {
        draw_grid(&painter, rect, camera, &state.settings.grid);
    }

    if state.settings.axes.visible {
        draw_axes(&painter, rect, camera, &state.settings.axes);
    }

    let solid = &state.settings.viewport.solid_color;
    let preview = &state.settings.viewport.preview_color;
    let preview_alpha = (state.settings.viewport.preview_alpha.clamp(0.0, 1.0) * 255.0) as u8;

    for (_, mesh) in scene.meshes() {
        let stroke = match mesh.style {
            MeshStyle::Solid => Stroke::new(1.0, Color32::from_rgb(solid[0], solid[1], solid[2])),
            MeshStyle::Preview => Stroke::new(
                1.5,
                Color32::from_rgba_unmultiplied(preview[0], preview[1], preview[2], preview_alpha.max(120)),
            ),
        };
        draw_box_edges(&painter, rect, camera, &mesh.data, stroke);
    }

    painter.text(
        rect.left_bottom() + egui::vec2(6.0, -6.0),
        egui::Align2::LEFT_BOTTOM,
        crate::i18n::t("viewport.no_gl"),
        egui::FontId::proportional(11.0),
        Color32::from_rgb(100, 100, 110),
    );
}

fn draw_grid(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &GridSettings) {
    let alpha = (settings.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let stroke = Stroke::new(0.5, Color32::from_rgba_premultiplied(60, 60, 60, alpha));

    let range = settings.range;
    let step = settings.size;
    let extent = range as f32 * step;

    for i in -range..=range {
        let f = i as f32 * step;
        draw_line_3d(painter, rect, camera, Vec3::new(f, 0.0, -extent), Vec3::new(f, 0.0, extent), stroke);
        draw_line_3d(painter, rect, camera, Vec3::new(-extent, 0.0, f), Vec3::new(extent, 0.0, f), stroke);
    }
}

fn draw_axes(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, settings: &AxisSettings) {
    let axes = [
        (Vec3::X, "X", Color32::from_rgb(220, 50, 50)),
        (Vec3::Y, "Y", Color32::from_rgb(50, 200, 50)),
        (Vec3::Z, "Z", Color32::from_rgb(50, 100, 220)),
    ];

    let Some(o) = camera.project(Vec3::ZERO, rect) else {
        return;
    };
    for (dir, label, color) in axes {
        if let Some(end) = camera.project(dir * settings.length, rect) {
            painter.line_segment([o, end], Stroke::new(settings.thickness, color));
            if settings.show_labels {
                painter.text(end, egui::Align2::LEFT_BOTTOM, label, egui::FontId::monospace(10.0), color);
            }
        }
    }
}

/// Outline every quad of a box mesh
fn draw_box_edges(painter: &egui::Painter, rect: Rect, camera: &ArcBallCamera, mesh: &MeshData, stroke: Stroke) {
    for face in 0..mesh.face_count() {
        let corners: Vec<Vec3> = (face * 4..face * 4 + 4).map(|v| mesh.position(v)).collect();
        for i in 0..4 {
            draw_line_3d(painter, rect, camera, corners[i], corners[(i + 1) % 4], stroke);
        }
    }
}

fn draw_line_3d(
    painter: &egui::Painter,
    rect: Rect,
    camera: &ArcBallCamera,
    a: Vec3,
    b: Vec3,
    stroke: Stroke,
) {
    if let (Some(a), Some(b)) = (camera.project(a, rect), camera.project(b, rect)) {
        if rect.contains(a) || rect.contains(b) {
            painter.line_segment([a, b], stroke);
        }
    }
}
