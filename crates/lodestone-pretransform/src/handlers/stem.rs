//! Connects an attached stem to the fruit it grew.

use lodestone_blocks::{BlockIdentifier, BlockType, StateKey, StateValue};
use lodestone_column::Column;

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::handler::{calculate_edges, relative_block, BlockPreTransformHandler};
use crate::neighbors::ColumnNeighbors;

/// Older formats drop the facing of attached stems; it is recovered by
/// finding an adjacent fruit block.
pub struct StemHandler {
    fruit: BlockType,
}

impl StemHandler {
    pub fn new(fruit: BlockType) -> Self {
        Self { fruit }
    }
}

impl BlockPreTransformHandler for StemHandler {
    fn required_edges(
        &self,
        _column: &Column,
        x: i32,
        _y: i32,
        z: i32,
        _block: &BlockIdentifier,
    ) -> EdgeSet {
        calculate_edges(x, z, &Direction::HORIZONTAL)
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
        // The first face with fruit wins.
        for direction in Direction::HORIZONTAL {
            let relative = relative_block(column, neighbors, x, y, z, direction);
            if relative.block_type() == self.fruit {
                return block.with_state(
                    StateKey::FacingHorizontal,
                    StateValue::Horizontal(direction.as_facing_horizontal()),
                );
            }
        }
        block
    }
}
