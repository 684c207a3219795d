//! Keyboard shortcut handling

use eframe::egui;

use crate::i18n::t;
use crate::state::{AppState, KeyOutcome};
use crate::viewport::ViewportPanel;

/// Forward key presses to the extrusion tool and the camera
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (reset, escape, home) = ctx.input(|i| {
        let plain = !i.modifiers.command && !i.modifiers.alt;
        (
            plain && i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Home),
        )
    });

    // R: back to the unit cube, dropping any armed face
    if reset {
        dispatch(state, egui::Key::R);
    }
    // Escape: leave the armed face without committing
    if escape {
        dispatch(state, egui::Key::Escape);
    }
    if home {
        ViewportPanel::reset_camera(state);
    }
}

fn dispatch(state: &mut AppState, key: egui::Key) {
    match state.extrusion.on_key_down(key) {
        KeyOutcome::Reset(_) => state.last_event = Some(t("event.reset").to_string()),
        KeyOutcome::Cancelled => state.last_event = Some(t("event.cancelled").to_string()),
        KeyOutcome::Ignored => {}
    }
}
