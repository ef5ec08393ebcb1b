//! FABRIK solve passes.
//!
//! Each tick runs an effector-first pass (pin the tip to the target, pull the
//! chain after it) followed by a root-first pass (re-pin the base, rebuild the
//! chain toward the tip). Neither pass alone can satisfy both anchors while
//! keeping segment lengths rigid; alternating them converges geometrically.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::chain::Limb;

/// Direction used when two joints coincide and the true direction is
/// undefined. Unit -y: the rest-pose segment direction in y-down screen
/// space. Keeps a degenerate pair from collapsing into NaN.
const FALLBACK_DIR: Vec2 = Vec2::new(0.0, -1.0);

const COINCIDENT_EPS: f64 = 1e-12;

/// Unit vector from `from` toward `to`, or [`FALLBACK_DIR`] for coincident
/// points.
fn direction(from: Point, to: Point) -> Vec2 {
    let v = to - from;
    let len = v.hypot();
    if len <= COINCIDENT_EPS {
        FALLBACK_DIR
    } else {
        v / len
    }
}

/// Iteration budget and stop tolerance for [`Limb::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveParams {
    /// Upper bound on pass pairs per solve call
    pub max_iterations: u32,
    /// Reach error below which the solve stops
    pub tolerance: f64,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance: 1e-4,
        }
    }
}

impl Limb {
    /// Effector-first pass: place the last joint on the target, then walk
    /// toward the base keeping each pair exactly `len` apart. Satisfies the
    /// target but may drag the first joint off the root.
    pub fn reach_target(&mut self) {
        let count = self.joints.len();
        self.joints[count - 1].pos = self.target;

        for i in (0..count - 1).rev() {
            let next = self.joints[i + 1].pos;
            let dir = direction(self.joints[i].pos, next);
            self.joints[i].pos = next - dir * self.joints[i].len;
        }
    }

    /// Root-first pass: place the first joint on the root, then walk toward
    /// the effector, re-spacing each joint along the direction the
    /// effector-first pass left it in. Satisfies the root; the effector ends
    /// up as close to the target as the chain's reach allows.
    pub fn anchor_root(&mut self) {
        self.joints[0].pos = self.root;

        for i in 1..self.joints.len() {
            let prev = self.joints[i - 1];
            let dir = direction(prev.pos, self.joints[i].pos);
            self.joints[i].pos = prev.pos + dir * prev.len;
        }
    }

    /// One effector-first + root-first pass pair, the fixed per-tick order.
    pub fn step(&mut self) {
        self.reach_target();
        self.anchor_root();
    }

    /// Advance one tick. `delta_time` is accepted for symmetry with
    /// time-stepped callers; the solve is purely geometric and ignores it.
    pub fn update(&mut self, _delta_time: f64) {
        self.step();
    }

    /// Repeat [`step`](Self::step) until the effector is within
    /// `params.tolerance` of the target, the error stops shrinking (the
    /// fixed point an unreachable target settles into), or the iteration
    /// budget runs out. Returns the number of pass pairs performed.
    pub fn solve(&mut self, params: &SolveParams) -> u32 {
        let mut prev = self.reach_error();
        if prev <= params.tolerance {
            return 0;
        }

        let mut iterations = 0;
        while iterations < params.max_iterations {
            self.step();
            iterations += 1;

            let err = self.reach_error();
            if err <= params.tolerance || prev - err < COINCIDENT_EPS {
                break;
            }
            prev = err;
        }

        tracing::trace!(
            "solve finished: {} iterations, residual {:.6}",
            iterations,
            self.reach_error()
        );
        iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-4;

    fn assert_lengths_held(limb: &Limb) {
        for pair in limb.joints().windows(2) {
            let measured = (pair[1].pos - pair[0].pos).hypot();
            assert!(
                (measured - pair[0].len).abs() < TOL,
                "segment drifted: measured {measured}, want {}",
                pair[0].len
            );
        }
    }

    #[test]
    fn test_reachable_target_is_hit() {
        let mut limb = Limb::with_segments(Point::new(0.0, 100.0), &[40.0, 30.0, 20.0]).unwrap();
        limb.set_target(Point::new(30.0, 40.0));

        let iterations = limb.solve(&SolveParams {
            max_iterations: 100,
            tolerance: TOL,
        });
        assert!(iterations > 0);
        assert!(limb.reach_error() < TOL, "residual {}", limb.reach_error());
        assert_eq!(limb.joints()[0].pos, limb.root());
        assert_lengths_held(&limb);
    }

    #[test]
    fn test_unreachable_target_stretches_straight() {
        // distance(root, target) = sqrt(50^2 + 100^2) ~ 111.8 > 90 = reach
        let root = Point::new(0.0, 100.0);
        let target = Point::new(50.0, 0.0);
        let mut limb = Limb::with_segments(root, &[40.0, 30.0, 20.0]).unwrap();
        limb.set_target(target);

        limb.solve(&SolveParams {
            max_iterations: 50,
            tolerance: TOL,
        });

        assert_eq!(limb.joints()[0].pos, root);
        assert_lengths_held(&limb);

        // effector sits at total reach from root, along the root->target ray
        let reach = limb.end_effector() - root;
        assert!((reach.hypot() - 90.0).abs() < TOL);
        let toward = target - root;
        let expected = root + toward * (90.0 / toward.hypot());
        assert!((limb.end_effector() - expected).hypot() < TOL);
    }

    #[test]
    fn test_error_decreases_monotonically_per_step() {
        let mut limb = Limb::build(Point::new(0.0, 0.0), 6, 50.0, 0.9).unwrap();
        limb.set_target(Point::new(120.0, 80.0));

        let mut prev = limb.reach_error();
        for _ in 0..20 {
            limb.step();
            let err = limb.reach_error();
            assert!(err <= prev + TOL, "error grew: {prev} -> {err}");
            prev = err;
        }
    }

    #[test]
    fn test_converged_pose_is_a_fixed_point() {
        let mut limb = Limb::with_segments(Point::new(0.0, 0.0), &[30.0, 30.0]).unwrap();
        limb.set_target(Point::new(25.0, -40.0));
        limb.solve(&SolveParams {
            max_iterations: 200,
            tolerance: 1e-9,
        });

        let settled = limb.clone();
        for _ in 0..5 {
            limb.step();
        }
        for (a, b) in limb.joints().iter().zip(settled.joints()) {
            assert!((a.pos - b.pos).hypot() < 1e-6);
        }
    }

    #[test]
    fn test_solve_on_rest_pose_does_nothing() {
        let mut limb = Limb::build(Point::new(10.0, 10.0), 5, 20.0, 0.8).unwrap();
        assert_eq!(limb.solve(&SolveParams::default()), 0);
    }

    #[test]
    fn test_single_joint_pins_to_root() {
        let root = Point::new(7.0, 3.0);
        let mut limb = Limb::with_segments(root, &[]).unwrap();
        limb.set_target(Point::new(-50.0, 90.0));

        limb.step();
        assert_eq!(limb.joints()[0].pos, root);
        assert_eq!(limb.end_effector(), root);
    }

    #[test]
    fn test_coincident_joints_use_fallback_direction() {
        // target on the base joint makes the effector-first pass put both
        // joints of the single segment on the same point; the fallback
        // direction must resolve it deterministically instead of NaN
        let root = Point::new(0.0, 0.0);
        let mut limb = Limb::with_segments(root, &[10.0]).unwrap();
        limb.set_target(root);

        limb.step();
        assert_eq!(limb.joints()[0].pos, root);
        // fallback points up, so the segment re-extends to the rest pose
        assert_eq!(limb.end_effector(), Point::new(0.0, -10.0));
        assert_lengths_held(&limb);
    }

    #[test]
    fn test_folded_chain_stays_finite() {
        let root = Point::new(0.0, 0.0);
        let mut limb = Limb::with_segments(root, &[10.0, 10.0]).unwrap();
        limb.set_target(root);

        for _ in 0..3 {
            limb.step();
        }
        for j in limb.joints() {
            assert!(j.pos.x.is_finite() && j.pos.y.is_finite());
        }
        assert_eq!(limb.joints()[0].pos, root);
        assert_lengths_held(&limb);
    }

    #[test]
    fn test_update_matches_step() {
        let mut a = Limb::build(Point::new(0.0, 0.0), 4, 25.0, 0.8).unwrap();
        let mut b = a.clone();
        a.set_target(Point::new(40.0, -10.0));
        b.set_target(Point::new(40.0, -10.0));

        a.step();
        b.update(0.016);
        assert_eq!(a, b);
    }
}
