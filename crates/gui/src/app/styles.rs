//! Application style configuration

use eframe::egui;

/// Dark theme with the selection accent taken from the face highlight color
pub fn configure_styles(ctx: &egui::Context, font_size: f32, accent: [u8; 3]) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();

    let rounding = egui::CornerRadius::same(3);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = rounding;
    }

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    style.visuals.panel_fill = egui::Color32::from_rgb(28, 28, 33);
    style.visuals.window_fill = egui::Color32::from_rgb(34, 34, 40);
    style.visuals.selection.bg_fill = dimmed(accent);

    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    let sizes = [
        (egui::TextStyle::Body, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Button, egui::FontId::proportional(font_size)),
        (egui::TextStyle::Small, egui::FontId::proportional(font_size * 0.85)),
        (egui::TextStyle::Heading, egui::FontId::proportional(font_size * 1.3)),
        (egui::TextStyle::Monospace, egui::FontId::monospace(font_size)),
    ];
    for (text_style, font) in sizes {
        style.text_styles.insert(text_style, font);
    }
}

/// Accent darkened enough for white text on top
fn dimmed(c: [u8; 3]) -> egui::Color32 {
    let scale = |v: u8| (v as f32 * 0.55 + 20.0).min(255.0) as u8;
    egui::Color32::from_rgb(scale(c[0]), scale(c[1]), scale(c[2]))
}
