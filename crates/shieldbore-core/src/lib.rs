//! Core types for the shieldbore tunnel planner.
//!
//! This crate provides the foundational types used throughout the project:
//! - 3D vector math
//! - Block specifications (identifier plus state properties)
//! - Common error types

pub mod error;
pub mod math;
pub mod types;

pub use error::{Error, Result};
pub use math::Vec3;
pub use types::BlockSpec;
