//! Application settings

use serde::{Deserialize, Serialize};

/// How the solver runs each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolverMode {
    /// One backward+forward pass pair per frame; relies on the frame rate to
    /// visually converge
    SinglePass,
    /// Repeat pass pairs each frame until the reach error drops below the
    /// configured tolerance
    #[default]
    Converge,
}

impl SolverMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SolverMode::SinglePass => "Single pass",
            SolverMode::Converge => "Converge",
        }
    }
}

/// Chain construction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSettings {
    /// Number of joints in the chain
    pub joint_count: usize,
    /// First segment length as a fraction of viewport height
    pub initial_len_fraction: f32,
    /// Ratio by which each successive segment shortens
    pub decay_ratio: f32,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            joint_count: 8,
            initial_len_fraction: 0.25,
            decay_ratio: 0.8,
        }
    }
}

/// Solver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    pub mode: SolverMode,
    /// Pass-pair budget per frame in Converge mode
    pub max_iterations: u32,
    /// Reach error below which a Converge solve stops
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            mode: SolverMode::default(),
            max_iterations: 10,
            tolerance: 1e-4,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Limb segment color RGB
    pub limb_color: [u8; 3],
    /// Joint circle color RGB
    pub joint_color: [u8; 3],
    /// Target marker color RGB
    pub target_color: [u8; 3],
    /// Joint circle radius in pixels
    pub joint_radius: f32,
    /// Show the debug overlay (target marker, segment lengths, solver stats)
    pub debug_draw: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [0, 0, 0],
            limb_color: [255, 255, 255],
            joint_color: [255, 255, 255],
            target_color: [255, 170, 60],
            joint_radius: 8.0,
            debug_draw: false,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Chain construction settings
    pub chain: ChainSettings,
    /// Solver settings
    #[serde(default)]
    pub solver: SolverSettings,
    /// Viewport settings
    pub viewport: ViewportSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "limbik", "limbik") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "limbik", "limbik") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}

/// Startup overrides parsed from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CliOverrides {
    pub joint_count: Option<usize>,
    pub decay_ratio: Option<f32>,
}

impl CliOverrides {
    /// Parse `--joints <n>` and `--decay <ratio>` from an argument list.
    /// Malformed or out-of-range values are logged and ignored.
    pub fn parse(args: &[String]) -> Self {
        let mut overrides = Self::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--joints" if i + 1 < args.len() => {
                    match args[i + 1].parse::<usize>() {
                        Ok(n) if n >= 1 => overrides.joint_count = Some(n),
                        _ => tracing::error!("invalid --joints value: {}", args[i + 1]),
                    }
                    i += 1;
                }
                "--decay" if i + 1 < args.len() => {
                    match args[i + 1].parse::<f32>() {
                        Ok(r) if r > 0.0 && r <= 1.0 => overrides.decay_ratio = Some(r),
                        _ => tracing::error!("invalid --decay value: {}", args[i + 1]),
                    }
                    i += 1;
                }
                other => tracing::warn!("ignoring unknown argument: {other}"),
            }
            i += 1;
        }
        overrides
    }

    pub fn apply(&self, settings: &mut AppSettings) {
        if let Some(n) = self.joint_count {
            settings.chain.joint_count = n;
        }
        if let Some(r) = self.decay_ratio {
            settings.chain.decay_ratio = r;
        }
    }
}
