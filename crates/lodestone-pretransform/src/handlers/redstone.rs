//! Derives the four visual connection states of redstone wire.

use lodestone_blocks::{
    BlockIdentifier, BlockType, RedstoneConnection, StateKey, StateValue,
};
use lodestone_column::Column;

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::handler::{relative_block, BlockPreTransformHandler};
use crate::neighbors::ColumnNeighbors;

fn connection_state(direction: Direction) -> StateKey {
    match direction {
        Direction::North => StateKey::RedstoneNorth,
        Direction::East => StateKey::RedstoneEast,
        Direction::South => StateKey::RedstoneSouth,
        Direction::West => StateKey::RedstoneWest,
        Direction::Up | Direction::Down => unreachable!("wire has no vertical connection state"),
    }
}

/// Wire can connect through a diagonal drop one block away, so all four
/// edges are requested as a conservative worst case.
pub struct RedstoneWireHandler;

impl RedstoneWireHandler {
    fn can_connect(
        &self,
        _source: &BlockIdentifier,
        direction: Direction,
        relative: &BlockIdentifier,
    ) -> bool {
        if !relative.block_type().is_redstone_connectable() {
            return false;
        }

        // A repeater only connects along its own axis.
        if relative.block_type() == BlockType::Repeater {
            let Some(facing) = relative
                .state(StateKey::FacingHorizontal)
                .and_then(|v| v.as_horizontal())
            else {
                return false;
            };
            return !facing.is_adjacent(direction.as_facing_horizontal());
        }

        // An observer only connects through its output face.
        if relative.block_type() == BlockType::Observer {
            return relative.state(StateKey::Facing).and_then(|v| v.as_facing())
                == Some(direction.as_facing());
        }

        true
    }

    fn calculate_connection(
        &self,
        source: &BlockIdentifier,
        direction: Direction,
        column: &Column,
        neighbors: &ColumnNeighbors<'_>,
        x: i32,
        y: i32,
        z: i32,
    ) -> RedstoneConnection {
        let relative = relative_block(column, neighbors, x, y, z, direction);
        if self.can_connect(source, direction, &relative) {
            return RedstoneConnection::Side;
        }

        // Step up: needs the block above the wire to be non-solid.
        let target = relative_block(column, neighbors, x, y + 1, z, direction);
        let above = relative_block(column, neighbors, x, y, z, Direction::Up);
        if self.can_connect(source, direction, &target)
            && !above.block_type().is_all_faces_solid()
        {
            return RedstoneConnection::Up;
        }

        // Step down: needs the lateral block at wire height to be non-solid.
        let target = relative_block(column, neighbors, x, y - 1, z, direction);
        if self.can_connect(source, direction, &target)
            && !relative.block_type().is_all_faces_solid()
        {
            return RedstoneConnection::Side;
        }

        RedstoneConnection::None
    }
}

impl BlockPreTransformHandler for RedstoneWireHandler {
    fn required_edges(
        &self,
        _column: &Column,
        _x: i32,
        _y: i32,
        _z: i32,
        _block: &BlockIdentifier,
    ) -> EdgeSet {
        EdgeSet::all()
    }

    fn handle(
        &self,
        column: &Column,
        neighbors: &ColumnNeighbors<'_>,
        x: i32,
        y: i32,
        z: i32,
        mut block: BlockIdentifier,
    ) -> BlockIdentifier {
        for direction in Direction::HORIZONTAL {
            let connection =
                self.calculate_connection(&block, direction, column, neighbors, x, y, z);
            block = block.with_state(
                connection_state(direction),
                StateValue::Redstone(connection),
            );
        }

        let connected = |key: StateKey| {
            block.state(key).and_then(|v| v.as_redstone()) != Some(RedstoneConnection::None)
        };
        let north = connected(StateKey::RedstoneNorth);
        let east = connected(StateKey::RedstoneEast);
        let south = connected(StateKey::RedstoneSouth);
        let west = connected(StateKey::RedstoneWest);
        let north_south_none = !north && !south;
        let east_west_none = !east && !west;

        // An isolated side is promoted to a connection when the
        // perpendicular axis is fully disconnected (the "dot" wire).
        if !north && east_west_none {
            block = block.with_state(
                StateKey::RedstoneNorth,
                StateValue::Redstone(RedstoneConnection::Side),
            );
        }
        if !east && north_south_none {
            block = block.with_state(
                StateKey::RedstoneEast,
                StateValue::Redstone(RedstoneConnection::Side),
            );
        }
        if !south && east_west_none {
            block = block.with_state(
                StateKey::RedstoneSouth,
                StateValue::Redstone(RedstoneConnection::Side),
            );
        }
        if !west && north_south_none {
            block = block.with_state(
                StateKey::RedstoneWest,
                StateValue::Redstone(RedstoneConnection::Side),
            );
        }

        block
    }
}
