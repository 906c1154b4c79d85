//! Read-side collaborator traits for the triggering actor.

use shieldbore_core::Vec3;

/// Where the triggering actor is and where it is looking.
pub trait PositionSource {
    /// Current position
    fn position(&self) -> Vec3;

    /// Current look direction. Not necessarily unit length; never mutated.
    fn facing(&self) -> Vec3;
}

/// Whether the triggering actor is riding a mount.
pub trait MountQuery {
    fn is_mounted(&self) -> bool;
}
