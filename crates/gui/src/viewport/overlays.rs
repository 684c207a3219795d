//! Viewport overlay drawing (axis labels, camera info, drag dimension)

use egui::Painter;
use glam::Vec3;

use crate::i18n::t;
use crate::state::AppState;

use super::camera::ArcBallCamera;

/// Draw axis labels just past the end of each axis
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, length: f32) {
    let reach = length * 1.08;
    let labels = [
        (Vec3::new(reach, 0.0, 0.0), "X", egui::Color32::from_rgb(220, 70, 70)),
        (Vec3::new(0.0, reach, 0.0), "Y", egui::Color32::from_rgb(70, 200, 70)),
        (Vec3::new(0.0, 0.0, reach), "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Camera distance and angles in the top-right corner
pub fn draw_camera_info(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 150.0, rect.top() + 4.0),
        egui::vec2(146.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "{}: {:.1}\n{}: {:.0}  {}: {:.0}",
            t("camera.distance"),
            camera.distance,
            t("camera.yaw"),
            camera.yaw.to_degrees(),
            t("camera.pitch"),
            camera.pitch.to_degrees(),
        ),
        egui::FontId::monospace(10.0),
        egui::Color32::from_rgb(160, 160, 170),
    );
}

/// Label the dragged face with the previewed dimension
pub fn draw_drag_dimension(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, state: &AppState) {
    let Some(sel) = state.extrusion.selected_face() else {
        return;
    };
    let Some(dims) = state.extrusion.preview_dimensions() else {
        return;
    };

    // Center of the far face along the dragged axis
    let c = dims.center();
    let mut anchor = Vec3::new(c[0] as f32, c[1] as f32, c[2] as f32);
    let value = dims.get(sel.axis);
    match sel.axis {
        shared::Axis::X => anchor.x = value as f32,
        shared::Axis::Y => anchor.y = value as f32,
        shared::Axis::Z => anchor.z = value as f32,
    }

    let Some(screen) = camera.project(anchor, rect) else {
        return;
    };
    let name = match sel.axis {
        shared::Axis::X => t("dim.width"),
        shared::Axis::Y => t("dim.height"),
        shared::Axis::Z => t("dim.depth"),
    };
    let text = format!("{name}: {value:.2}");
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::monospace(12.0),
        egui::Color32::from_rgb(230, 230, 240),
    );
    let bg = egui::Rect::from_center_size(screen, galley.size() + egui::vec2(8.0, 4.0));
    painter.rect_filled(bg, 3.0, egui::Color32::from_rgba_premultiplied(20, 30, 70, 200));
    painter.galley(bg.min + egui::vec2(4.0, 2.0), galley, egui::Color32::WHITE);
}
