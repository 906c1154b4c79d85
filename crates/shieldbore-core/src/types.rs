//! Block specifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier used for empty space.
pub const AIR_ID: &str = "air";

/// A block type plus optional state properties.
///
/// Renders in fill-command syntax: a bare identifier (`glass`) or an
/// identifier with a bracketed state list (`lantern ["hanging":true]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockSpec {
    id: String,
    states: Vec<(String, String)>,
}

impl BlockSpec {
    /// Create a block specification with no state properties
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            states: Vec::new(),
        }
    }

    /// Air (empty space)
    #[must_use]
    pub fn air() -> Self {
        Self::new(AIR_ID)
    }

    /// Add a state property, e.g. `hanging` = `true`
    #[must_use]
    pub fn with_state(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.states.push((key.into(), value.into()));
        self
    }

    /// The block identifier, without state properties
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// State properties in insertion order
    #[must_use]
    pub fn states(&self) -> &[(String, String)] {
        &self.states
    }

    /// Returns true if this block is air (empty space)
    #[must_use]
    pub fn is_air(&self) -> bool {
        self.id == AIR_ID
    }
}

impl fmt::Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.states.is_empty() {
            write!(f, " [")?;
            for (i, (key, value)) in self.states.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "\"{key}\":{value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
