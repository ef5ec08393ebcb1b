mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state` and `crate::harness`
// resolve to the lib crate types everywhere in the binary.
pub use limbik_gui_lib::harness;
pub use limbik_gui_lib::state;

use app::LimbikApp;
use state::CliOverrides;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "limbik_gui=info,limbik_gui_lib=info,limb=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let overrides = CliOverrides::parse(&args);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("limbik — FABRIK limb demo")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "limbik-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(LimbikApp::new(cc, overrides)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
