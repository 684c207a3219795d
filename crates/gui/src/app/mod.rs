//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;
use shared::BoxDimensions;

use crate::state::{AppSettings, AppState};
use crate::ui::status_bar;
use crate::viewport::ViewportPanel;

/// Main application
pub struct BoxtrudeApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl BoxtrudeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial: BoxDimensions) -> Self {
        let settings = AppSettings::load();
        crate::i18n::set_lang(settings.ui.language);

        styles::configure_styles(
            &cc.egui_ctx,
            settings.ui.font_size,
            settings.extrusion.highlight_color,
        );

        let state = AppState::new(settings, initial);

        let mut viewport = ViewportPanel::new();
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        } else {
            tracing::warn!("No GL context, viewport falls back to wireframe");
        }

        let last_font_size = state.settings.ui.font_size;
        tracing::info!("Boxtrude started");

        Self {
            state,
            viewport,
            last_font_size,
        }
    }
}

impl eframe::App for BoxtrudeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}
