//! Sparse block-grid world.

use hashbrown::HashMap;
use shieldbore_core::{BlockSpec, Error, Result, Vec3};
use shieldbore_tunnel::VolumeFiller;
use tracing::debug;

/// Block position in world coordinates.
type BlockPos = (i64, i64, i64);

/// A sparse in-memory voxel world with a bounded buildable vertical range.
///
/// Only non-air blocks are stored; filling with air removes entries. Fill
/// corners may arrive in either order and fractional coordinates are floored
/// to the containing block, mirroring how fill commands address blocks.
pub struct GridWorld {
    min_y: i64,
    max_y: i64,
    blocks: HashMap<BlockPos, BlockSpec>,
}

impl Default for GridWorld {
    fn default() -> Self {
        // Overworld build limits
        Self::new(-64, 319)
    }
}

impl GridWorld {
    /// Create a world buildable in the inclusive vertical range `[min_y, max_y]`.
    #[must_use]
    pub fn new(min_y: i64, max_y: i64) -> Self {
        Self {
            min_y,
            max_y,
            blocks: HashMap::new(),
        }
    }

    /// The block at a position, or `None` for air.
    #[must_use]
    pub fn block_at(&self, x: i64, y: i64, z: i64) -> Option<&BlockSpec> {
        self.blocks.get(&(x, y, z))
    }

    /// Number of placed (non-air) blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no blocks are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Count placed blocks with the given identifier.
    #[must_use]
    pub fn count_of(&self, id: &str) -> usize {
        self.blocks.values().filter(|b| b.id() == id).count()
    }
}

/// Floor two corner components to block coordinates and order them.
fn span(a: f64, b: f64) -> (i64, i64) {
    let a = a.floor() as i64;
    let b = b.floor() as i64;
    (a.min(b), a.max(b))
}

impl VolumeFiller for GridWorld {
    fn fill(&mut self, corner_a: Vec3, corner_b: Vec3, block: &BlockSpec) -> Result<()> {
        if block.id().is_empty() {
            return Err(Error::InvalidBlock("empty block identifier".into()));
        }

        let (x0, x1) = span(corner_a.x, corner_b.x);
        let (y0, y1) = span(corner_a.y, corner_b.y);
        let (z0, z1) = span(corner_a.z, corner_b.z);

        if y0 < self.min_y || y1 > self.max_y {
            return Err(Error::OutOfBounds(format!(
                "fill spans y {y0}..{y1}, buildable range is {}..{}",
                self.min_y, self.max_y
            )));
        }

        for x in x0..=x1 {
            for y in y0..=y1 {
                for z in z0..=z1 {
                    if block.is_air() {
                        self.blocks.remove(&(x, y, z));
                    } else {
                        self.blocks.insert((x, y, z), block.clone());
                    }
                }
            }
        }

        debug!(block = %block, x0, y0, z0, x1, y1, z1, "filled volume");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_accepts_either_corner_ordering() {
        let mut world = GridWorld::default();
        let stone = BlockSpec::new("stone");
        world
            .fill(Vec3::new(2.0, 5.0, 2.0), Vec3::new(0.0, 5.0, 0.0), &stone)
            .unwrap();
        assert_eq!(world.len(), 9);
        assert_eq!(world.block_at(1, 5, 1), Some(&stone));
        assert_eq!(world.block_at(0, 5, 2), Some(&stone));
    }

    #[test]
    fn fractional_corners_floor_to_blocks() {
        let mut world = GridWorld::default();
        let stone = BlockSpec::new("stone");
        world
            .fill(Vec3::new(0.9, 0.2, 0.5), Vec3::new(0.1, 0.8, 0.4), &stone)
            .unwrap();
        assert_eq!(world.len(), 1);
        assert_eq!(world.block_at(0, 0, 0), Some(&stone));
    }

    #[test]
    fn air_carves_placed_blocks() {
        let mut world = GridWorld::default();
        let stone = BlockSpec::new("stone");
        world
            .fill(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0), &stone)
            .unwrap();
        world
            .fill(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0), &BlockSpec::air())
            .unwrap();
        assert_eq!(world.len(), 26);
        assert!(world.block_at(1, 1, 1).is_none());
    }

    #[test]
    fn fill_outside_buildable_range_errors() {
        let mut world = GridWorld::new(0, 100);
        let err = world
            .fill(
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(0.0, 5.0, 0.0),
                &BlockSpec::new("stone"),
            )
            .unwrap_err();
        assert!(matches!(err, Error::OutOfBounds(_)));
        assert!(world.is_empty());
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let mut world = GridWorld::default();
        let err = world
            .fill(Vec3::ZERO, Vec3::ZERO, &BlockSpec::new(""))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBlock(_)));
    }
}
