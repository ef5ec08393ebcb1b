use egui::Ui;

use crate::state::{AppState, SolverMode};

pub fn show(ui: &mut Ui, state: &AppState, delta_time: f32) {
    ui.horizontal(|ui| {
        let joint_count = state
            .chain
            .limb()
            .map_or(0, |l| l.joints().len());
        ui.weak(format!("Joints: {joint_count}"));

        ui.separator();
        ui.weak(state.settings.solver.mode.display_name());

        ui.separator();
        match state.chain.reach_error() {
            Some(err) => {
                ui.label(format!("error {err:.2} px"));
                if state.settings.solver.mode == SolverMode::Converge {
                    ui.weak(format!("({} iter)", state.chain.last_iterations));
                }
            }
            None => {
                ui.weak("building…");
            }
        }

        ui.separator();
        ui.weak("hold Space or drag to move the target");

        // Right-aligned frame rate and version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("limbik v0.1");
            if delta_time > 0.0 {
                ui.weak(format!("{:.0} fps", 1.0 / delta_time));
            }
        });
    });
}
