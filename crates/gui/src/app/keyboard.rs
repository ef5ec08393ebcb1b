//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application.
/// Space (target follow) lives in the viewport, next to the pointer state.
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // D — toggle debug overlay
        if i.key_pressed(egui::Key::D) {
            state.settings.viewport.debug_draw = !state.settings.viewport.debug_draw;
        }
        // R — rebuild the chain at its rest pose
        if i.key_pressed(egui::Key::R) {
            state.chain.reset();
        }
        // Escape — close settings window
        if i.key_pressed(egui::Key::Escape) {
            state.show_settings_window = false;
        }
    });
}
