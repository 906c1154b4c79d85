//! Facing resolution and the tunnel's local frame.

use shieldbore_core::Vec3;

/// A horizontal cardinal direction (never Y).
///
/// The facing vector of an actor is collapsed to the nearest of these four
/// before any volume math happens; tunnels are always axis-aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl AxisDirection {
    /// Collapse a raw facing vector to the nearest horizontal cardinal.
    ///
    /// The axis with the larger-magnitude component wins; ties go to X,
    /// including the degenerate straight-up/straight-down case where both
    /// horizontal components are zero. The sign follows the winning
    /// component, with zero treated as positive. Resolution is total.
    #[must_use]
    pub fn from_facing(facing: Vec3) -> Self {
        if facing.x.abs() >= facing.z.abs() {
            if facing.x < 0.0 {
                Self::NegX
            } else {
                Self::PosX
            }
        } else if facing.z < 0.0 {
            Self::NegZ
        } else {
            Self::PosZ
        }
    }

    /// The unit vector along this direction
    #[must_use]
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::new(1.0, 0.0, 0.0),
            Self::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Self::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Self::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// The {forward, right, up} frame a tunnel is laid out in.
///
/// Invariant: the three vectors form a right-handed, mutually orthogonal,
/// unit-length basis for every [`AxisDirection`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalBasis {
    /// Travel axis of the tunnel.
    pub forward: Vec3,
    /// 90° horizontal rotation of `forward`.
    pub right: Vec3,
    /// Vertical axis completing the frame (+Y for every valid direction).
    pub up: Vec3,
}

impl LocalBasis {
    /// Build the frame for a resolved direction.
    #[must_use]
    pub fn from_axis(axis: AxisDirection) -> Self {
        let forward = axis.unit();
        let right = Vec3::new(-forward.z, 0.0, forward.x).normalized();
        let up = (-forward.cross(right)).normalized();
        Self { forward, right, up }
    }
}
