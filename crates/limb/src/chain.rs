//! Chain data model: joints, segment lengths, root and target anchors.

use kurbo::Point;

/// Errors raised when chain construction parameters are invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum LimbError {
    /// The chain must contain at least one joint
    NoJoints,
    /// A segment length was zero or negative
    NonPositiveSegment(f64),
    /// Decay ratio outside (0, 1]
    InvalidDecay(f64),
}

impl std::fmt::Display for LimbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LimbError::NoJoints => write!(f, "chain needs at least one joint"),
            LimbError::NonPositiveSegment(len) => {
                write!(f, "segment length must be positive, got {len}")
            }
            LimbError::InvalidDecay(ratio) => {
                write!(f, "decay ratio must be in (0, 1], got {ratio}")
            }
        }
    }
}

impl std::error::Error for LimbError {}

/// A joint: a position plus the rigid length of the segment connecting it to
/// the next joint toward the effector. The last joint's `len` has no
/// successor to constrain and is never read by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Position in the same coordinate space as the target
    pub pos: Point,
    /// Distance held to the next joint
    pub len: f64,
}

impl Joint {
    pub fn new(x: f64, y: f64, len: f64) -> Self {
        Self {
            pos: Point::new(x, y),
            len,
        }
    }
}

/// An articulated chain of rigid segments. Joint 0 sits at the base next to
/// `root`; the last joint is the end effector that chases `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Limb {
    pub(crate) joints: Vec<Joint>,
    pub(crate) root: Point,
    pub(crate) target: Point,
}

impl Limb {
    /// Build a chain of `joint_count` joints stacked straight up from `root`
    /// (y-down screen space), segment `i` measuring
    /// `initial_len * decay_ratio^i`. The target starts at the end effector,
    /// so a fresh chain is already at rest with zero reach error.
    pub fn build(
        root: Point,
        joint_count: usize,
        initial_len: f64,
        decay_ratio: f64,
    ) -> Result<Self, LimbError> {
        if joint_count == 0 {
            return Err(LimbError::NoJoints);
        }
        if !(initial_len > 0.0) {
            return Err(LimbError::NonPositiveSegment(initial_len));
        }
        if !(decay_ratio > 0.0 && decay_ratio <= 1.0) {
            return Err(LimbError::InvalidDecay(decay_ratio));
        }

        let mut joints = Vec::with_capacity(joint_count);
        let mut len = initial_len;
        let mut sum = 0.0;
        for _ in 0..joint_count {
            joints.push(Joint::new(root.x, root.y - sum, len));
            sum += len;
            len *= decay_ratio;
        }

        let target = joints[joint_count - 1].pos;
        Ok(Self {
            joints,
            root,
            target,
        })
    }

    /// Build a chain with explicit segment lengths, stacked straight up from
    /// `root`. Produces `segment_lens.len() + 1` joints; the trailing joint
    /// is the effector and carries no outgoing segment.
    pub fn with_segments(root: Point, segment_lens: &[f64]) -> Result<Self, LimbError> {
        if let Some(&bad) = segment_lens.iter().find(|&&l| !(l > 0.0)) {
            return Err(LimbError::NonPositiveSegment(bad));
        }

        let mut joints = Vec::with_capacity(segment_lens.len() + 1);
        let mut sum = 0.0;
        for &len in segment_lens {
            joints.push(Joint::new(root.x, root.y - sum, len));
            sum += len;
        }
        joints.push(Joint::new(root.x, root.y - sum, 0.0));

        let target = joints[joints.len() - 1].pos;
        Ok(Self {
            joints,
            root,
            target,
        })
    }

    /// Read-only view of the joints, base first, effector last.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn root(&self) -> Point {
        self.root
    }

    /// Re-pin the anchor; takes effect on the next root-first pass.
    pub fn set_root(&mut self, root: Point) {
        self.root = root;
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Position of the last joint.
    pub fn end_effector(&self) -> Point {
        self.joints[self.joints.len() - 1].pos
    }

    /// Maximum reach: the sum of every segment length that constrains a pair
    /// (the last joint's `len` does not).
    pub fn total_length(&self) -> f64 {
        let count = self.joints.len();
        self.joints[..count - 1].iter().map(|j| j.len).sum()
    }

    /// Distance from the end effector to the target.
    pub fn reach_error(&self) -> f64 {
        (self.end_effector() - self.target).hypot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_starts_at_rest() {
        let limb = Limb::build(Point::new(640.0, 720.0), 8, 180.0, 0.8).unwrap();
        assert_eq!(limb.joints().len(), 8);
        assert_eq!(limb.joints()[0].pos, Point::new(640.0, 720.0));
        assert_eq!(limb.reach_error(), 0.0);
        assert_eq!(limb.target(), limb.end_effector());
    }

    #[test]
    fn test_build_decays_segment_lengths() {
        let limb = Limb::build(Point::new(0.0, 0.0), 4, 100.0, 0.5).unwrap();
        let lens: Vec<f64> = limb.joints().iter().map(|j| j.len).collect();
        assert_eq!(lens, vec![100.0, 50.0, 25.0, 12.5]);
        // stacked upward, each joint one segment above the previous
        assert_eq!(limb.joints()[1].pos.y, -100.0);
        assert_eq!(limb.joints()[2].pos.y, -150.0);
        assert_eq!(limb.joints()[3].pos.y, -175.0);
    }

    #[test]
    fn test_build_rejects_bad_parameters() {
        let root = Point::new(0.0, 0.0);
        assert_eq!(Limb::build(root, 0, 10.0, 0.8), Err(LimbError::NoJoints));
        assert_eq!(
            Limb::build(root, 3, 0.0, 0.8),
            Err(LimbError::NonPositiveSegment(0.0))
        );
        assert_eq!(
            Limb::build(root, 3, 10.0, 0.0),
            Err(LimbError::InvalidDecay(0.0))
        );
        assert_eq!(
            Limb::build(root, 3, 10.0, 1.5),
            Err(LimbError::InvalidDecay(1.5))
        );
        assert!(Limb::build(root, 3, 10.0, 1.0).is_ok());
    }

    #[test]
    fn test_with_segments_counts_and_reach() {
        let limb = Limb::with_segments(Point::new(0.0, 100.0), &[40.0, 30.0, 20.0]).unwrap();
        assert_eq!(limb.joints().len(), 4);
        assert_eq!(limb.total_length(), 90.0);
        assert_eq!(limb.end_effector(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_with_segments_rejects_zero_length() {
        assert_eq!(
            Limb::with_segments(Point::new(0.0, 0.0), &[10.0, 0.0]),
            Err(LimbError::NonPositiveSegment(0.0))
        );
    }

    #[test]
    fn test_single_joint_chain() {
        let limb = Limb::with_segments(Point::new(5.0, 5.0), &[]).unwrap();
        assert_eq!(limb.joints().len(), 1);
        assert_eq!(limb.total_length(), 0.0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LimbError::NoJoints.to_string(),
            "chain needs at least one joint"
        );
        assert!(LimbError::InvalidDecay(2.0).to_string().contains("2"));
    }
}
