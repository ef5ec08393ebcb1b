//! Chain simulation state: owns the limb, rebuilds it when configuration
//! changes, and advances the solver once per frame.

use kurbo::Point;
use limb::{Limb, SolveParams};

use super::settings::{ChainSettings, SolverMode, SolverSettings};

/// Owns the limb and the per-frame solver bookkeeping.
#[derive(Default)]
pub struct ChainState {
    limb: Option<Limb>,
    /// Settings the current limb was built with (tracked to rebuild on edit)
    built_with: Option<ChainSettings>,
    /// Pass pairs spent by the last frame's solve
    pub last_iterations: u32,
}

impl ChainState {
    /// Keep the limb in sync with the viewport: build it on first sight of a
    /// viewport, rebuild when chain settings changed, and re-pin the root to
    /// the new anchor when only the viewport moved or resized.
    pub fn ensure_built(&mut self, root: Point, viewport_height: f32, settings: &ChainSettings) {
        let settings_changed = self.built_with.as_ref() != Some(settings);
        if self.limb.is_none() || settings_changed {
            self.rebuild(root, viewport_height, settings);
        } else if let Some(limb) = &mut self.limb {
            if limb.root() != root {
                limb.set_root(root);
            }
        }
    }

    fn rebuild(&mut self, root: Point, viewport_height: f32, settings: &ChainSettings) {
        // Remember the attempt even on failure so an invalid edit is logged
        // once, not every frame.
        self.built_with = Some(settings.clone());

        let initial_len = f64::from(viewport_height * settings.initial_len_fraction);
        match Limb::build(
            root,
            settings.joint_count,
            initial_len,
            f64::from(settings.decay_ratio),
        ) {
            Ok(limb) => {
                tracing::info!(
                    "built chain: {} joints, reach {:.1}px, root ({:.0}, {:.0})",
                    limb.joints().len(),
                    limb.total_length(),
                    root.x,
                    root.y
                );
                self.limb = Some(limb);
                self.last_iterations = 0;
            }
            Err(e) => tracing::error!("invalid chain settings: {e}"),
        }
    }

    /// Drop the limb; it is rebuilt at the rest pose on the next frame.
    pub fn reset(&mut self) {
        self.limb = None;
        self.built_with = None;
        self.last_iterations = 0;
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        if let Some(limb) = &mut self.limb {
            limb.set_target(Point::new(x, y));
        }
    }

    /// Advance one frame in the configured solver mode.
    pub fn tick(&mut self, delta_time: f64, solver: &SolverSettings) {
        let Some(limb) = &mut self.limb else {
            return;
        };
        match solver.mode {
            SolverMode::SinglePass => {
                limb.update(delta_time);
                self.last_iterations = 1;
            }
            SolverMode::Converge => {
                let params = SolveParams {
                    max_iterations: solver.max_iterations,
                    tolerance: solver.tolerance,
                };
                self.last_iterations = limb.solve(&params);
            }
        }
    }

    pub fn limb(&self) -> Option<&Limb> {
        self.limb.as_ref()
    }

    pub fn reach_error(&self) -> Option<f64> {
        self.limb.as_ref().map(|l| l.reach_error())
    }
}
