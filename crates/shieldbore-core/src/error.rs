//! Error types shared across the project.

use thiserror::Error;

/// Project-wide error type.
///
/// Planning itself is total and never fails; these variants are produced by
/// world-side collaborators applying fill instructions.
#[derive(Error, Debug)]
pub enum Error {
    /// A fill target lies outside the buildable range of the world.
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// A block specification the world cannot apply.
    #[error("Invalid block: {0}")]
    InvalidBlock(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
