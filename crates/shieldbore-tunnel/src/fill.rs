//! Write-side collaborator trait for applying fill instructions.

use shieldbore_core::{BlockSpec, Result, Vec3};

/// Applies one rectangular fill to a world.
///
/// The planner hands corners over exactly as computed, so `corner_a` and
/// `corner_b` may arrive in either order; implementations must normalize.
/// Failures propagate back unchanged — the planner neither retries nor rolls
/// back earlier fills.
pub trait VolumeFiller {
    fn fill(&mut self, corner_a: Vec3, corner_b: Vec3, block: &BlockSpec) -> Result<()>;
}
