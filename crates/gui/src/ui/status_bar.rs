use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, InteractionMode};

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let d = state.extrusion.committed();
        ui.weak(format!(
            "{}: {:.2} × {:.2} × {:.2}",
            t("status.box"),
            d.width,
            d.height,
            d.depth
        ));

        ui.separator();

        match state.extrusion.mode() {
            InteractionMode::Idle => {
                ui.label(t("status.idle"));
                ui.separator();
                ui.weak(t("status.hint_idle"));
            }
            InteractionMode::FaceSelected(sel) => {
                ui.colored_label(
                    egui::Color32::from_rgb(120, 160, 255),
                    format!("{} [{}]", t("status.face_selected"), sel.axis.label()),
                );
                if let Some(p) = state.extrusion.preview_dimensions() {
                    ui.separator();
                    ui.label(format!(
                        "{}: {:.2} × {:.2} × {:.2}",
                        t("status.preview"),
                        p.width,
                        p.height,
                        p.depth
                    ));
                }
                ui.separator();
                ui.weak(t("status.hint_selected"));
            }
        }

        // Right-aligned last event and version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("Boxtrude v", env!("CARGO_PKG_VERSION")));
            if let Some(event) = &state.last_event {
                ui.separator();
                ui.weak(event);
            }
        });
    });
}
