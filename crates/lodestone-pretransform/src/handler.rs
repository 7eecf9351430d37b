//! Handler contracts and the shared relative-lookup helpers.

use lodestone_blocks::BlockIdentifier;
use lodestone_column::{BlockEntity, Column, ColumnPos, Entity};

use crate::direction::Direction;
use crate::edge::EdgeSet;
use crate::neighbors::ColumnNeighbors;

/// Per-block-type strategy run once per block occurrence.
///
/// `handle` is a pure function of the block, its position, and whatever
/// neighbor columns are present; it must not mutate the column. The caller
/// applies the returned identifier if it differs from the input.
pub trait BlockPreTransformHandler: Send + Sync {
    /// The edges required before `handle` can run with full information.
    /// Empty means the block is safe to resolve immediately.
    fn required_edges(
        &self,
        column: &Column,
        x: i32,
        y: i32,
        z: i32,
        block: &BlockIdentifier,
    ) -> EdgeSet;

    /// Recompute the block's identifier. The neighbor map may be partial or
    /// empty; every neighbor lookup defaults to air when absent.
    fn handle(
        &self,
        column: &Column,
        neighbors: &ColumnNeighbors<'_>,
        x: i32,
        y: i32,
        z: i32,
        block: BlockIdentifier,
    ) -> BlockIdentifier;
}

/// Per-entity-kind strategy. `handle` returning true removes the entity
/// from its current column (it was relocated or consumed).
pub trait EntityPreTransformHandler: Send + Sync {
    /// Whether this handler applies to the entity. Handlers are tested in
    /// registration order; the first match wins.
    fn handles(&self, entity: &Entity) -> bool;

    fn required_edges(&self, column: &Column, entity: &Entity) -> EdgeSet;

    fn handle(
        &self,
        column: &mut Column,
        neighbors: &ColumnNeighbors<'_>,
        entity: &mut Entity,
    ) -> bool;
}

/// Resolve the column owning the block at a direction's target, panicking
/// when a handler reaches for an edge it never declared.
fn relative_column<'a>(
    column: &'a Column,
    neighbors: &ColumnNeighbors<'a>,
    x: i32,
    z: i32,
    direction: Direction,
) -> Option<&'a Column> {
    let Some(edge) = direction.edge() else {
        return Some(column);
    };
    let (dx, _, dz) = direction.offset();
    let target = ColumnPos::containing(x + dx, z + dz);
    if target == column.pos() {
        return Some(column);
    }
    let neighbor = neighbors.get(edge)?;
    // A mismatched neighbor means the handler asked for a position beyond
    // the edges it declared; that is a handler bug, not a data condition.
    assert_eq!(
        neighbor.pos(),
        target,
        "relative request at ({x}, {z}) toward {direction:?} is outside the declared edges",
    );
    Some(neighbor)
}

/// Read the block adjacent to `(x, y, z)` in `direction`, looking through
/// the neighbor map when the position crosses the column border. Absent
/// neighbors read as air.
pub fn relative_block(
    column: &Column,
    neighbors: &ColumnNeighbors<'_>,
    x: i32,
    y: i32,
    z: i32,
    direction: Direction,
) -> BlockIdentifier {
    match relative_column(column, neighbors, x, z, direction) {
        Some(target) => {
            let (dx, dy, dz) = direction.offset();
            target.get_block(x + dx, y + dy, z + dz)
        }
        None => BlockIdentifier::air(),
    }
}

/// Read the block entity adjacent to `(x, y, z)` in `direction`; absent
/// neighbors (and empty positions) read as `None`.
pub fn relative_block_entity<'a>(
    column: &'a Column,
    neighbors: &ColumnNeighbors<'a>,
    x: i32,
    y: i32,
    z: i32,
    direction: Direction,
) -> Option<&'a BlockEntity> {
    let target = relative_column(column, neighbors, x, z, direction)?;
    let (dx, dy, dz) = direction.offset();
    target.block_entity(x + dx, y + dy, z + dz)
}

/// The edges actually crossed when stepping from `(x, z)` in each of the
/// given directions. A direction only requires its edge when the offset
/// leaves the origin's column.
pub fn calculate_edges(x: i32, z: i32, directions: &[Direction]) -> EdgeSet {
    let origin = ColumnPos::containing(x, z);
    let mut set = EdgeSet::empty();
    for direction in directions {
        let Some(edge) = direction.edge() else {
            continue;
        };
        let (dx, _, dz) = direction.offset();
        if ColumnPos::containing(x + dx, z + dz) != origin {
            set.insert(edge);
        }
    }
    set
}

/// Connection test shared by the connectable handler families.
pub trait CanConnect: Send + Sync {
    fn can_connect(
        &self,
        source: &BlockIdentifier,
        direction: Direction,
        relative: &BlockIdentifier,
    ) -> bool;
}

impl<F> CanConnect for F
where
    F: Fn(&BlockIdentifier, Direction, &BlockIdentifier) -> bool + Send + Sync,
{
    fn can_connect(
        &self,
        source: &BlockIdentifier,
        direction: Direction,
        relative: &BlockIdentifier,
    ) -> bool {
        self(source, direction, relative)
    }
}
