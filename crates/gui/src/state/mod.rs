pub mod chain;
pub mod settings;

pub use chain::ChainState;
pub use settings::{
    AppSettings, ChainSettings, CliOverrides, SolverMode, SolverSettings, UiSettings,
    ViewportSettings,
};

/// Combined application state
pub struct AppState {
    pub chain: ChainState,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            chain: ChainState::default(),
            settings: AppSettings::load(),
            show_settings_window: false,
        }
    }
}

impl AppState {
    /// State with explicit settings and no disk access (tests, harness).
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            chain: ChainState::default(),
            settings,
            show_settings_window: false,
        }
    }
}
