//! Pairs adjacent single chests into double-chest halves.

use lodestone_blocks::{BlockIdentifier, ChestKind, FacingHorizontal, StateKey, StateValue};
use lodestone_column::Column;

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::handler::{
    calculate_edges, relative_block, relative_block_entity, BlockPreTransformHandler,
};
use crate::neighbors::ColumnNeighbors;

/// Formats that store no pairing data leave every chest `Single`; this
/// handler derives the left/right halves from adjacency.
///
/// Convention: a chest whose partner sits on its anticlockwise side (as
/// seen from the facing) becomes `Right`, the partner `Left`. The decision
/// only reads the partner's type and facing, so the two halves resolve
/// consistently in either order.
pub struct ChestHandler;

impl ChestHandler {
    /// Pairing applies to unresolved chests with container data present.
    fn is_unpaired_chest(column: &Column, x: i32, y: i32, z: i32, block: &BlockIdentifier) -> bool {
        if !block.block_type().is_chest() {
            return false;
        }
        let kind = block.state(StateKey::ChestKind).and_then(|v| v.as_chest());
        if kind != Some(ChestKind::Single) {
            return false;
        }
        column
            .block_entity(x, y, z)
            .is_some_and(|block_entity| block_entity.is_chest())
    }

    /// Whether `partner` can become the half complementing `expected`.
    fn can_pair(
        block: &BlockIdentifier,
        facing: FacingHorizontal,
        partner: &BlockIdentifier,
        expected: ChestKind,
    ) -> bool {
        if partner.block_type() != block.block_type() {
            return false;
        }
        if partner.state(StateKey::FacingHorizontal).and_then(|v| v.as_horizontal())
            != Some(facing)
        {
            return false;
        }
        let kind = partner.state(StateKey::ChestKind).and_then(|v| v.as_chest());
        kind == Some(ChestKind::Single) || kind == Some(expected)
    }
}

impl BlockPreTransformHandler for ChestHandler {
    fn required_edges(
        &self,
        column: &Column,
        x: i32,
        y: i32,
        z: i32,
        block: &BlockIdentifier,
    ) -> EdgeSet {
        if !Self::is_unpaired_chest(column, x, y, z, block) {
            return EdgeSet::empty();
        }
        let Some(facing) = block
            .state(StateKey::FacingHorizontal)
            .and_then(|v| v.as_horizontal())
        else {
            return EdgeSet::empty();
        };
        calculate_edges(x, z, &Direction::adjacent_faces(facing))
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
        if !Self::is_unpaired_chest(column, x, y, z, &block) {
            return block;
        }
        let Some(facing) = block
            .state(StateKey::FacingHorizontal)
            .and_then(|v| v.as_horizontal())
        else {
            return block;
        };

        // The partner must be a matching chest block with container data of
        // its own.
        let has_container = |side: Direction| {
            relative_block_entity(column, neighbors, x, y, z, side)
                .is_some_and(|block_entity| block_entity.is_chest())
        };

        // Anticlockwise side first, matching the original's check order.
        let right_side = Direction::from(facing.rotate_anticlockwise());
        let partner = relative_block(column, neighbors, x, y, z, right_side);
        if Self::can_pair(&block, facing, &partner, ChestKind::Left) && has_container(right_side) {
            return block.with_state(StateKey::ChestKind, StateValue::Chest(ChestKind::Right));
        }

        let left_side = Direction::from(facing.rotate_clockwise());
        let partner = relative_block(column, neighbors, x, y, z, left_side);
        if Self::can_pair(&block, facing, &partner, ChestKind::Right) && has_container(left_side) {
            return block.with_state(StateKey::ChestKind, StateValue::Chest(ChestKind::Left));
        }

        block.with_state(StateKey::ChestKind, StateValue::Chest(ChestKind::Single))
    }
}
