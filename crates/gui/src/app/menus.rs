//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{AppSettings, AppState, CommitMissPolicy};
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            ui.close_menu();
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.edit"), |ui| {
        if ui.button(t("menu.reset_box")).clicked() {
            state.extrusion.reset();
            state.last_event = Some(t("event.reset").to_string());
            ui.close_menu();
        }
        if ui
            .add_enabled(
                state.extrusion.is_face_selected(),
                egui::Button::new(t("menu.cancel_selection")),
            )
            .clicked()
        {
            if state.extrusion.cancel() {
                state.last_event = Some(t("event.cancelled").to_string());
            }
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.view"), |ui| {
        if ui.button(t("menu.reset_camera")).clicked() {
            ViewportPanel::reset_camera(state);
            ui.close_menu();
        }
        ui.separator();
        ui.checkbox(&mut state.settings.grid.visible, t("menu.show_grid"));
        ui.checkbox(&mut state.settings.axes.visible, t("menu.show_axes"));
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                set_lang(Lang::Ru);
                state.settings.ui.language = Lang::Ru;
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                state.settings.ui.language = Lang::En;
                ui.close_menu();
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_extrusion_settings(ui, state);
                show_viewport_settings(ui, state);
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn policy_label(policy: CommitMissPolicy) -> &'static str {
    match policy {
        CommitMissPolicy::KeepSelection => t("settings.miss_keep"),
        CommitMissPolicy::CancelSelection => t("settings.miss_cancel"),
        CommitMissPolicy::ReuseLastPreview => t("settings.miss_reuse"),
    }
}

fn show_extrusion_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.extrusion"));
    let ext = &mut state.settings.extrusion;

    ui.horizontal(|ui| {
        ui.label(t("settings.min_dimension"));
        ui.add(
            egui::DragValue::new(&mut ext.min_dimension)
                .speed(0.001)
                .range(0.001..=10.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.commit_miss"));
        egui::ComboBox::from_id_salt("commit_miss_combo")
            .selected_text(policy_label(ext.commit_miss))
            .show_ui(ui, |ui| {
                for policy in CommitMissPolicy::all() {
                    ui.selectable_value(&mut ext.commit_miss, *policy, policy_label(*policy));
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.highlight_color"));
        color_button(ui, &mut ext.highlight_color);
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    let vp = &mut state.settings.viewport;

    ui.horizontal(|ui| {
        ui.label(t("settings.bg_color"));
        color_button(ui, &mut vp.background_color);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.solid_color"));
        color_button(ui, &mut vp.solid_color);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.preview_color"));
        color_button(ui, &mut vp.preview_color);
    });
    ui.horizontal(|ui| {
        ui.label(t("settings.preview_alpha"));
        ui.add(egui::Slider::new(&mut vp.preview_alpha, 0.05..=1.0));
    });
    ui.add_space(10.0);
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut state.settings.grid.visible, t("settings.grid_visible"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.1)
                .range(0.1..=100.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_range"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));
    ui.checkbox(&mut state.settings.axes.visible, t("settings.axes_visible"));
    ui.checkbox(&mut state.settings.axes.show_labels, t("settings.axes_labels"));

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.5..=20.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_thickness"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.thickness)
                .speed(0.1)
                .range(0.5..=5.0),
        );
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.apply_settings();
        }
        if ui.button(t("settings.save")).clicked() {
            state.apply_settings();
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = AppSettings::default();
            set_lang(state.settings.ui.language);
            state.apply_settings();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}

fn color_button(ui: &mut egui::Ui, rgb: &mut [u8; 3]) {
    let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
    if ui.color_edit_button_srgba(&mut color).changed() {
        *rgb = [color.r(), color.g(), color.b()];
    }
}
