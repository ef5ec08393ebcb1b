//! Articulated 2D chain model and FABRIK solver.
//!
//! A [`Limb`] is an ordered run of rigid segments anchored at a `root` point
//! and reaching for a movable `target`. The solver repositions joints with
//! alternating effector-first and root-first passes, preserving every segment
//! length while pinning the base to the root and pulling the tip as close to
//! the target as the chain allows.
//!
//! The crate is UI-free; the demo application and the headless test harness
//! both consume it through the read-only joint view.

pub mod chain;
pub mod solver;

pub use chain::{Joint, Limb, LimbError};
pub use solver::SolveParams;
