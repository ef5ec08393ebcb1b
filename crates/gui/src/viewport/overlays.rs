//! Debug overlay drawing (target marker, segment lengths, solver stats)

use eframe::egui;

use crate::state::AppState;

use super::{rgb, to_screen};

const CROSSHAIR_HALF: f32 = 7.0;

/// Draw the debug overlay on top of the limb.
pub fn draw_debug(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let Some(limb) = state.chain.limb() else {
        return;
    };
    let viewport = &state.settings.viewport;

    // Target crosshair
    let target = to_screen(limb.target());
    let stroke = egui::Stroke::new(1.5, rgb(viewport.target_color));
    painter.line_segment(
        [
            target - egui::vec2(CROSSHAIR_HALF, 0.0),
            target + egui::vec2(CROSSHAIR_HALF, 0.0),
        ],
        stroke,
    );
    painter.line_segment(
        [
            target - egui::vec2(0.0, CROSSHAIR_HALF),
            target + egui::vec2(0.0, CROSSHAIR_HALF),
        ],
        stroke,
    );

    // Measured length at each segment midpoint
    let label_color = rgb(viewport.target_color);
    for pair in limb.joints().windows(2) {
        let measured = (pair[1].pos - pair[0].pos).hypot();
        let mid = to_screen(pair[0].pos.midpoint(pair[1].pos));
        painter.text(
            mid + egui::vec2(6.0, 0.0),
            egui::Align2::LEFT_CENTER,
            format!("{measured:.1}"),
            egui::FontId::monospace(12.0),
            label_color,
        );
    }

    // Solver stats in the top-left corner
    let stats = format!(
        "reach {:.1}px of {:.1}px  error {:.2}px  iterations {}",
        (limb.target() - limb.root()).hypot(),
        limb.total_length(),
        limb.reach_error(),
        state.chain.last_iterations,
    );
    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        stats,
        egui::FontId::monospace(12.0),
        label_color,
    );
}
