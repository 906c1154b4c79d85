//! Tunnel planning for the shieldbore project.
//!
//! Given an actor's position, facing direction, and mount state, the planner
//! collapses the facing to the nearest horizontal cardinal axis and projects
//! five axis-aligned construction volumes along it: shell, hollow interior,
//! floor, lantern strip, and rail line. Applying the resulting fill
//! instructions to a world is left to a [`VolumeFiller`] collaborator.

pub mod actor;
pub mod axis;
pub mod fill;
pub mod plan;
pub mod trigger;

pub use actor::{MountQuery, PositionSource};
pub use axis::{AxisDirection, LocalBasis};
pub use fill::VolumeFiller;
pub use plan::{plan_tunnel, FillInstruction, Volume};
pub use trigger::{ItemUseEvent, TunnelTrigger, DEFAULT_TRIGGER_ITEM};
