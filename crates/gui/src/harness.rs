//! Headless test harness for driving the demo without a window.
//!
//! Owns the same state the app owns and replays the per-frame sequence the
//! viewport runs (keep the chain built, move the target, tick the solver), so
//! integration tests exercise the real update path.

use kurbo::Point;

use crate::state::{AppSettings, ChainState};

/// Fixed tick used by the harness in place of a real frame clock.
const TICK_SECONDS: f64 = 1.0 / 60.0;

/// Headless harness — app state plus a fake viewport size.
pub struct TestHarness {
    pub settings: AppSettings,
    pub chain: ChainState,
    width: f32,
    height: f32,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness at the demo's default window size with default settings.
    pub fn new() -> Self {
        Self::with_size(1280.0, 720.0)
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self::with_settings(width, height, AppSettings::default())
    }

    pub fn with_settings(width: f32, height: f32, settings: AppSettings) -> Self {
        let mut harness = Self {
            settings,
            chain: ChainState::default(),
            width,
            height,
        };
        harness.sync_chain();
        harness
    }

    /// Root anchor: bottom-center of the fake viewport, matching the app.
    pub fn root(&self) -> Point {
        Point::new(f64::from(self.width) * 0.5, f64::from(self.height))
    }

    fn sync_chain(&mut self) {
        self.chain
            .ensure_built(self.root(), self.height, &self.settings.chain);
    }

    // ── Driving ───────────────────────────────────────────────

    /// Move the target, as pointer input would.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.chain.set_target(x, y);
    }

    /// Run one frame: rebuild if settings changed, then solve.
    pub fn tick(&mut self) {
        self.sync_chain();
        self.chain.tick(TICK_SECONDS, &self.settings.solver);
    }

    /// Run `frames` frames.
    pub fn tick_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.tick();
        }
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn joint_count(&self) -> usize {
        self.chain.limb().map_or(0, |l| l.joints().len())
    }

    pub fn joint_positions(&self) -> Vec<Point> {
        self.chain
            .limb()
            .map_or_else(Vec::new, |l| l.joints().iter().map(|j| j.pos).collect())
    }

    /// Measured distances between consecutive joints.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.joint_positions()
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).hypot())
            .collect()
    }

    pub fn end_effector(&self) -> Option<Point> {
        self.chain.limb().map(|l| l.end_effector())
    }

    pub fn reach_error(&self) -> Option<f64> {
        self.chain.reach_error()
    }

    pub fn total_length(&self) -> Option<f64> {
        self.chain.limb().map(|l| l.total_length())
    }
}
