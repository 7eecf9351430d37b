//! Recovers the top-half state of two-block plants.

use lodestone_blocks::{BlockIdentifier, Half, StateKey, StateValue};
use lodestone_column::Column;

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::handler::{relative_block, BlockPreTransformHandler};
use crate::neighbors::ColumnNeighbors;

/// Legacy saves store a generic "upper half" block; the actual plant is
/// copied up from the bottom half.
pub struct TallPlantHandler;

impl BlockPreTransformHandler for TallPlantHandler {
    fn required_edges(
        &self,
        _column: &Column,
        _x: i32,
        _y: i32,
        _z: i32,
        _block: &BlockIdentifier,
    ) -> EdgeSet {
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
        if block.state(StateKey::Half).and_then(|v| v.as_half()) != Some(Half::Top) {
            return block;
        }
        let below = relative_block(column, neighbors, x, y, z, Direction::Down);
        if !below.block_type().is_tall_plant() {
            return block;
        }
        below.with_state(StateKey::Half, StateValue::Half(Half::Top))
    }
}
