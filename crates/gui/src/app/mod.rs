//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::{AppState, CliOverrides};
use crate::ui::status_bar;
use crate::viewport::ViewportPanel;

/// Main application
pub struct LimbikApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Settings snapshot from the last save (for change detection)
    saved_settings: crate::state::AppSettings,
}

impl LimbikApp {
    pub fn new(cc: &eframe::CreationContext<'_>, overrides: CliOverrides) -> Self {
        let mut state = AppState::default();
        overrides.apply(&mut state.settings);

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let saved_settings = state.settings.clone();

        Self {
            state,
            viewport: ViewportPanel::new(),
            last_font_size,
            saved_settings,
        }
    }
}

impl eframe::App for LimbikApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Persist settings when edited
        if self.state.settings != self.saved_settings {
            self.state.settings.save();
            self.saved_settings = self.state.settings.clone();
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        let delta_time = ctx.input(|i| i.stable_dt);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::chain_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state);
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
                status_bar::show(ui, &self.state, delta_time);
            });

        // ── Viewport: input, solve, draw ─────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state, delta_time);
            });

        // The limb animates while input is idle; keep painting
        ctx.request_repaint();
    }
}
