//! Merges the split state of the two halves of a door.

use lodestone_blocks::{BlockIdentifier, Half, StateKey};
use lodestone_column::Column;

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::handler::{relative_block, BlockPreTransformHandler};
use crate::neighbors::ColumnNeighbors;

/// Some formats store a door's full state split across its halves: the
/// bottom half carries `open` and `facing`, the top half carries the hinge
/// side. Each half copies the missing keys from its vertical counterpart.
pub struct DoorHandler;

impl DoorHandler {
    fn can_connect(&self, relative: &BlockIdentifier) -> bool {
        relative.block_type().is_door()
    }
}

impl BlockPreTransformHandler for DoorHandler {
    fn required_edges(
        &self,
        _column: &Column,
        _x: i32,
        _y: i32,
        _z: i32,
        _block: &BlockIdentifier,
    ) -> EdgeSet {
        // The other half is in the same column.
        EdgeSet::empty()
    }

    fn handle(
        &self,
        column: &Column,
        neighbors: &ColumnNeighbors<'_>,
        x: i32,
        y: i32,
        z: i32,
        block: BlockIdentifier,
    ) -> BlockIdentifier {
        let half = block.state(StateKey::Half).and_then(|v| v.as_half());
        let toward = match half {
            Some(Half::Top) => Direction::Down,
            _ => Direction::Up,
        };
        let other_half = relative_block(column, neighbors, x, y, z, toward);
        if !self.can_connect(&other_half) {
            return block;
        }

        // Only explicitly stored states are copied; the half that carries a
        // key is the source for it, never a default.
        if half == Some(Half::Bottom) {
            // The bottom learns its hinge from the top.
            block.with_state_opt(StateKey::DoorHinge, other_half.raw_state(StateKey::DoorHinge))
        } else {
            // The top learns open and facing from the bottom.
            block
                .with_state_opt(StateKey::Open, other_half.raw_state(StateKey::Open))
                .with_state_opt(
                    StateKey::FacingHorizontal,
                    other_half.raw_state(StateKey::FacingHorizontal),
                )
        }
    }
}
