//! Construction-volume planning.

use serde::{Deserialize, Serialize};
use shieldbore_core::{BlockSpec, Vec3};

use crate::axis::{AxisDirection, LocalBasis};

/// Nominal tunnel half-width in blocks.
///
/// The cross-section is currently fixed by the unit offsets below (shell at
/// ±2, cavity at ±1) and this constant is not multiplied into any of them;
/// the physical width does not change with it.
pub const RADIUS: f64 = 2.0;

/// Tunnel length in blocks along the travel axis.
pub const LENGTH: f64 = 60.0;

/// Wall block identifier.
pub const WALL_BLOCK: &str = "glass";
/// Roof block identifier (same as the walls).
pub const ROOF_BLOCK: &str = WALL_BLOCK;
/// Floor block identifier.
pub const FLOOR_BLOCK: &str = "redstone_block";
/// Rail block identifier.
pub const RAIL_BLOCK: &str = "golden_rail";
/// Lantern block identifier (laid hanging from the roof).
pub const LANTERN_BLOCK: &str = "lantern";

/// An axis-aligned rectangular volume given by two opposite corners.
///
/// Corners are not sorted into min/max order; consumers must accept either
/// ordering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub start: Vec3,
    pub end: Vec3,
}

impl Volume {
    /// Create a volume from two opposite corners
    #[must_use]
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// One fill operation: set every block in `volume` to `block`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillInstruction {
    pub volume: Volume,
    pub block: BlockSpec,
}

impl FillInstruction {
    fn new(volume: Volume, block: BlockSpec) -> Self {
        Self { volume, block }
    }
}

/// Plan a straight tunnel from `position` along the cardinal axis nearest to
/// `facing`.
///
/// Returns the fill instructions in application order: shell, hollow
/// interior, floor, lantern strip, rail line. Riding a mount lowers the rider
/// by one block visually, so `mounted` raises the working position by one to
/// keep the tunnel aligned with the mount rather than the rider's feet.
///
/// All volumes are derived from the {forward, right, up} frame with unit
/// sideways/vertical steps; see [`RADIUS`] for why the cross-section is
/// fixed.
#[must_use]
pub fn plan_tunnel(position: Vec3, facing: Vec3, mounted: bool) -> Vec<FillInstruction> {
    let axis = AxisDirection::from_facing(facing);
    let LocalBasis { forward, right, up } = LocalBasis::from_axis(axis);

    let mut position = position;
    if mounted {
        position.y += 1.0;
    }

    // Vector from the tunnel start to its far end along the travel axis
    let longitudinal = forward * LENGTH;

    // Each span starts one block ahead of the actor and runs to the far end.
    let shell_start = position - right * 2.0 + forward;
    let shell_end = position + right * 2.0 + longitudinal;
    let cavity_start = position - right + forward;
    let cavity_end = position + right + longitudinal;
    let center_start = position + forward;
    let center_end = position + longitudinal;

    // Side rail lines for a possible double-track layout. Computed but never
    // emitted; only the centered rail below is laid.
    // TODO: emit or delete these once the double-track layout is decided.
    let _rail_right = Volume::new(
        position + right + forward,
        position + right + longitudinal,
    );
    let _rail_left = Volume::new(
        position - right + forward,
        position - right + longitudinal,
    );

    vec![
        // Outermost solid boundary, one below the floor line to three above
        FillInstruction::new(
            Volume::new(shell_start - up, shell_end + up * 3.0),
            BlockSpec::new(WALL_BLOCK),
        ),
        // Carve the walkable cavity inside the shell
        FillInstruction::new(
            Volume::new(cavity_start, cavity_end + up * 2.0),
            BlockSpec::air(),
        ),
        // Overwrite the bottom shell layer with the floor material
        FillInstruction::new(
            Volume::new(shell_start - up, shell_end - up),
            BlockSpec::new(FLOOR_BLOCK),
        ),
        // Lantern strip hanging below the roof, centered on the travel axis
        FillInstruction::new(
            Volume::new(center_start + up * 2.0, center_end + up * 2.0),
            BlockSpec::new(LANTERN_BLOCK).with_state("hanging", "true"),
        ),
        // Centered rail on the cavity floor
        FillInstruction::new(
            Volume::new(center_start, center_end),
            BlockSpec::new(RAIL_BLOCK),
        ),
    ]
}
