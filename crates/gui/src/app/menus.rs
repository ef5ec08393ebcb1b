//! Application menu bar and settings window

use eframe::egui;

use crate::state::{AppState, ChainSettings, SolverMode};

/// Show the chain menu
pub fn chain_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Chain", |ui| {
        if ui.button("Reset pose (R)").clicked() {
            state.chain.reset();
            ui.close_menu();
        }
        if ui.button("Restore default chain").clicked() {
            state.settings.chain = ChainSettings::default();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut state.settings.viewport.debug_draw, "Debug overlay (D)");
        ui.separator();
        if ui.button("Settings…").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_chain_settings(ui, state);
                show_solver_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_chain_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Chain");
    let chain = &mut state.settings.chain;

    ui.horizontal(|ui| {
        ui.label("Joints");
        ui.add(
            egui::DragValue::new(&mut chain.joint_count)
                .speed(1)
                .range(1..=64),
        );
    });

    ui.horizontal(|ui| {
        ui.label("First segment (of height)");
        ui.add(egui::Slider::new(&mut chain.initial_len_fraction, 0.05..=0.45));
    });

    ui.horizontal(|ui| {
        ui.label("Decay ratio");
        ui.add(egui::Slider::new(&mut chain.decay_ratio, 0.05..=1.0));
    });
    ui.add_space(10.0);
}

fn show_solver_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Solver");
    let solver = &mut state.settings.solver;

    ui.horizontal(|ui| {
        ui.label("Mode");
        egui::ComboBox::from_id_salt("solver_mode_combo")
            .selected_text(solver.mode.display_name())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut solver.mode,
                    SolverMode::Converge,
                    SolverMode::Converge.display_name(),
                );
                ui.selectable_value(
                    &mut solver.mode,
                    SolverMode::SinglePass,
                    SolverMode::SinglePass.display_name(),
                );
            });
    });

    if solver.mode == SolverMode::Converge {
        ui.horizontal(|ui| {
            ui.label("Max iterations");
            ui.add(
                egui::DragValue::new(&mut solver.max_iterations)
                    .speed(1)
                    .range(1..=64),
            );
        });

        ui.horizontal(|ui| {
            ui.label("Tolerance");
            ui.add(
                egui::Slider::new(&mut solver.tolerance, 1e-6..=1.0)
                    .logarithmic(true),
            );
        });
    }
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Viewport");
    let viewport = &mut state.settings.viewport;

    ui.horizontal(|ui| {
        ui.label("Background");
        ui.color_edit_button_srgb(&mut viewport.background_color);
        ui.label("Limb");
        ui.color_edit_button_srgb(&mut viewport.limb_color);
        ui.label("Joints");
        ui.color_edit_button_srgb(&mut viewport.joint_color);
        ui.label("Target");
        ui.color_edit_button_srgb(&mut viewport.target_color);
    });

    ui.horizontal(|ui| {
        ui.label("Joint radius");
        ui.add(
            egui::DragValue::new(&mut viewport.joint_radius)
                .speed(0.5)
                .range(1.0..=24.0)
                .suffix(" px"),
        );
    });

    ui.checkbox(&mut viewport.debug_draw, "Debug overlay");
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size");
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(10.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Restore defaults").clicked() {
            state.settings = crate::state::AppSettings::default();
        }
        if ui.button("Close").clicked() {
            state.show_settings_window = false;
        }
    });
}
