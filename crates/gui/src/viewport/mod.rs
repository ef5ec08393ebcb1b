//! 2D viewport panel: pointer-driven target updates and limb drawing

mod overlays;

use eframe::egui;
use kurbo::Point;

use crate::state::AppState;

/// Stroke width for limb segments
const LIMB_STROKE_WIDTH: f32 = 2.0;

/// 2D viewport panel drawing the limb with the egui painter
pub struct ViewportPanel;

impl ViewportPanel {
    pub fn new() -> Self {
        Self
    }

    /// Run one frame of the demo: target input, solve, draw — in that order.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, delta_time: f32) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );

        // Root pinned to the bottom-center of the viewport
        let root = Point::new(
            f64::from(rect.center().x),
            f64::from(rect.max.y),
        );
        state
            .chain
            .ensure_built(root, rect.height(), &state.settings.chain);

        // ── Target input: follow the pointer while Space is held or the
        //    primary button drags ─────────────────────────────
        let text_focused = ui.memory(|m| m.focused().is_some());
        let space_held = !text_focused && ui.input(|i| i.key_down(egui::Key::Space));
        if space_held || response.dragged() {
            let pointer = response
                .interact_pointer_pos()
                .or_else(|| response.hover_pos());
            if let Some(pos) = pointer {
                state.chain.set_target(f64::from(pos.x), f64::from(pos.y));
            }
        }

        // ── Solve ────────────────────────────────────────────
        state.chain.tick(f64::from(delta_time), &state.settings.solver);

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── Draw ─────────────────────────────────────────────
        let painter = ui.painter_at(rect);
        let viewport = &state.settings.viewport;
        painter.rect_filled(rect, egui::CornerRadius::ZERO, rgb(viewport.background_color));

        let Some(limb) = state.chain.limb() else {
            return;
        };

        let screen_joints: Vec<egui::Pos2> =
            limb.joints().iter().map(|j| to_screen(j.pos)).collect();

        let stroke = egui::Stroke::new(LIMB_STROKE_WIDTH, rgb(viewport.limb_color));
        for pair in screen_joints.windows(2) {
            painter.line_segment([pair[0], pair[1]], stroke);
        }
        for pos in &screen_joints {
            painter.circle_filled(*pos, viewport.joint_radius, rgb(viewport.joint_color));
        }

        // Ring around the anchor
        painter.circle_stroke(
            to_screen(limb.root()),
            viewport.joint_radius + 3.0,
            egui::Stroke::new(1.5, rgb(viewport.limb_color)),
        );

        if viewport.debug_draw {
            overlays::draw_debug(&painter, rect, state);
        }
    }
}

pub(crate) fn to_screen(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

pub(crate) fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}
