//! Item-use trigger handling.
//!
//! The core owns no event subscription; the hosting application owns its
//! event loop and invokes [`TunnelTrigger::handle`] for each item-use event
//! it delivers.

use shieldbore_core::Result;
use tracing::{debug, info};

use crate::actor::{MountQuery, PositionSource};
use crate::fill::VolumeFiller;
use crate::plan::plan_tunnel;

/// Item identifier that bores a tunnel unless the host configures another.
pub const DEFAULT_TRIGGER_ITEM: &str = "shieldbore:shield_machine";

/// A discrete "item used" event delivered by the host.
#[derive(Debug)]
pub struct ItemUseEvent<'a, A> {
    /// Identifier of the used item type.
    pub item_id: &'a str,
    /// The actor that used the item.
    pub source: &'a A,
}

/// Gates tunnel boring on a configured item identifier.
#[derive(Debug, Clone)]
pub struct TunnelTrigger {
    item_id: String,
}

impl Default for TunnelTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_ITEM)
    }
}

impl TunnelTrigger {
    /// Create a trigger that fires on the given item identifier
    #[must_use]
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }

    /// Does an item identifier match this trigger?
    #[must_use]
    pub fn matches(&self, item_id: &str) -> bool {
        self.item_id == item_id
    }

    /// Handle one item-use event.
    ///
    /// Returns the number of fill instructions applied: zero when the item
    /// does not match, five otherwise. Instructions are applied synchronously
    /// in planning order; the first fill error propagates and earlier fills
    /// stay applied.
    pub fn handle<A, F>(&self, event: &ItemUseEvent<'_, A>, filler: &mut F) -> Result<usize>
    where
        A: PositionSource + MountQuery,
        F: VolumeFiller,
    {
        if !self.matches(event.item_id) {
            debug!(item = event.item_id, "item use ignored");
            return Ok(0);
        }

        let actor = event.source;
        let plan = plan_tunnel(actor.position(), actor.facing(), actor.is_mounted());
        let count = plan.len();
        for instruction in plan {
            filler.fill(
                instruction.volume.start,
                instruction.volume.end,
                &instruction.block,
            )?;
        }
        info!(fills = count, "tunnel bored");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldbore_core::{BlockSpec, Vec3};

    struct TestActor {
        position: Vec3,
        facing: Vec3,
        mounted: bool,
    }

    impl PositionSource for TestActor {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn facing(&self) -> Vec3 {
            self.facing
        }
    }

    impl MountQuery for TestActor {
        fn is_mounted(&self) -> bool {
            self.mounted
        }
    }

    #[derive(Default)]
    struct RecordingFiller {
        fills: Vec<(Vec3, Vec3, BlockSpec)>,
    }

    impl VolumeFiller for RecordingFiller {
        fn fill(&mut self, corner_a: Vec3, corner_b: Vec3, block: &BlockSpec) -> Result<()> {
            self.fills.push((corner_a, corner_b, block.clone()));
            Ok(())
        }
    }

    fn walking_actor() -> TestActor {
        TestActor {
            position: Vec3::new(0.0, 64.0, 0.0),
            facing: Vec3::new(1.0, 0.0, 0.0),
            mounted: false,
        }
    }

    #[test]
    fn matching_item_applies_five_fills_in_order() {
        let trigger = TunnelTrigger::default();
        let actor = walking_actor();
        let mut filler = RecordingFiller::default();

        let applied = trigger
            .handle(
                &ItemUseEvent {
                    item_id: DEFAULT_TRIGGER_ITEM,
                    source: &actor,
                },
                &mut filler,
            )
            .unwrap();

        assert_eq!(applied, 5);
        let ids: Vec<&str> = filler.fills.iter().map(|(_, _, b)| b.id()).collect();
        assert_eq!(
            ids,
            ["glass", "air", "redstone_block", "lantern", "golden_rail"]
        );
    }

    #[test]
    fn mismatched_item_applies_nothing() {
        let trigger = TunnelTrigger::default();
        let actor = walking_actor();
        let mut filler = RecordingFiller::default();

        let applied = trigger
            .handle(
                &ItemUseEvent {
                    item_id: "shieldbore:pickaxe",
                    source: &actor,
                },
                &mut filler,
            )
            .unwrap();

        assert_eq!(applied, 0);
        assert!(filler.fills.is_empty());
    }

    #[test]
    fn custom_trigger_item() {
        let trigger = TunnelTrigger::new("demo:borer");
        assert!(trigger.matches("demo:borer"));
        assert!(!trigger.matches(DEFAULT_TRIGGER_ITEM));
    }

    #[test]
    fn fill_errors_propagate_without_rollback() {
        struct FailingFiller {
            applied: usize,
        }

        impl VolumeFiller for FailingFiller {
            fn fill(
                &mut self,
                _corner_a: Vec3,
                _corner_b: Vec3,
                _block: &BlockSpec,
            ) -> Result<()> {
                if self.applied == 2 {
                    return Err(shieldbore_core::Error::OutOfBounds("test".into()));
                }
                self.applied += 1;
                Ok(())
            }
        }

        let trigger = TunnelTrigger::default();
        let actor = walking_actor();
        let mut filler = FailingFiller { applied: 0 };

        let result = trigger.handle(
            &ItemUseEvent {
                item_id: DEFAULT_TRIGGER_ITEM,
                source: &actor,
            },
            &mut filler,
        );

        assert!(result.is_err());
        assert_eq!(filler.applied, 2);
    }
}
