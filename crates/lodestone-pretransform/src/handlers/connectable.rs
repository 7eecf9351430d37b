//! Handlers that derive boolean connection states from adjacency.

use lodestone_blocks::{BlockIdentifier, StateKey, StateValue};
use lodestone_column::Column;

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::handler::{calculate_edges, relative_block, BlockPreTransformHandler, CanConnect};
use crate::neighbors::ColumnNeighbors;

fn connection_state(direction: Direction) -> StateKey {
    match direction {
        Direction::North => StateKey::North,
        Direction::East => StateKey::East,
        Direction::South => StateKey::South,
        Direction::West => StateKey::West,
        Direction::Up => StateKey::Up,
        Direction::Down => StateKey::Down,
    }
}

/// Connects the four horizontal faces (fences, panes, tripwire).
///
/// The connection rule is supplied by the registrar, usually as a closure,
/// so one handler body serves every connectable family.
pub struct HorizontalConnectableHandler<C> {
    connect: C,
}

impl<C: CanConnect> HorizontalConnectableHandler<C> {
    pub fn new(connect: C) -> Self {
        Self { connect }
    }
}

impl<C: CanConnect> BlockPreTransformHandler for HorizontalConnectableHandler<C> {
    fn required_edges(
        &self,
        _column: &Column,
        x: i32,
        _y: i32,
        z: i32,
        _block: &BlockIdentifier,
    ) -> EdgeSet {
        // Every lateral face is checked.
        calculate_edges(x, z, &Direction::HORIZONTAL)
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
            let relative = relative_block(column, neighbors, x, y, z, direction);
            let connected = self.connect.can_connect(&block, direction, &relative);
            block = block.with_state(connection_state(direction), StateValue::Bool(connected));
        }
        block
    }
}

/// Connects all six faces (walls and similar).
pub struct ConnectableHandler<C> {
    connect: C,
}

impl<C: CanConnect> ConnectableHandler<C> {
    pub fn new(connect: C) -> Self {
        Self { connect }
    }
}

impl<C: CanConnect> BlockPreTransformHandler for ConnectableHandler<C> {
    fn required_edges(
        &self,
        _column: &Column,
        x: i32,
        _y: i32,
        z: i32,
        _block: &BlockIdentifier,
    ) -> EdgeSet {
        calculate_edges(x, z, &Direction::ALL)
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
        for direction in Direction::ALL {
            let relative = relative_block(column, neighbors, x, y, z, direction);
            let connected = self.connect.can_connect(&block, direction, &relative);
            block = block.with_state(connection_state(direction), StateValue::Bool(connected));
        }
        block
    }
}
