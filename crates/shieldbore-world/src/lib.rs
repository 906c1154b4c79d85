//! In-memory voxel world for the shieldbore project.
//!
//! The planner only ever talks to a [`shieldbore_tunnel::VolumeFiller`];
//! this crate is the reference implementation of that collaborator, used by
//! the demo application and by tests.

pub mod grid;

pub use grid::GridWorld;
