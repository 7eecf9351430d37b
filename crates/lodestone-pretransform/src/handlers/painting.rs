//! Re-anchors paintings whose stored position uses a different convention.

use lodestone_blocks::FacingHorizontal;
use lodestone_column::{Column, ColumnPos, Entity, EntityKind, PaintingEntity};

use crate::edge::{Edge, EdgeSet};
use crate::handler::EntityPreTransformHandler;
use crate::neighbors::ColumnNeighbors;

fn tile_offset(painting: &PaintingEntity) -> (i32, i32, i32) {
    let width = painting.motive.width();
    let height = painting.motive.height();
    (
        if painting.facing == FacingHorizontal::South && width % 2 == 0 {
            -1
        } else {
            0
        },
        if height % 2 == 0 { -1 } else { 0 },
        if painting.facing == FacingHorizontal::West && width % 2 == 0 {
            -1
        } else {
            0
        },
    )
}

fn position_offset(painting: &PaintingEntity) -> (f64, f64, f64) {
    let width = painting.motive.width();
    let height = painting.motive.height();
    let x_center = if width % 2 == 0 { 0.0 } else { -0.5 };
    let y = if height % 2 == 0 { 0.0 } else { -0.5 };
    match painting.facing {
        FacingHorizontal::North => (x_center, y, -0.96875),
        FacingHorizontal::East => (-0.03125, y, x_center),
        FacingHorizontal::South => (x_center, y, -0.03125),
        FacingHorizontal::West => (-0.96875, y, x_center),
    }
}

/// Entity pre-transform that moves a painting onto the anchor convention
/// of the target format. The corrected position may land in a neighboring
/// column; the painting is then removed here and handed to that column.
pub struct PaintingRelocator {
    inverse: bool,
}

impl PaintingRelocator {
    /// `inverse` subtracts the offsets instead of adding them (the writer
    /// direction of the conversion).
    pub fn new(inverse: bool) -> Self {
        Self { inverse }
    }

    /// The column that owns the painting once re-anchored.
    fn target_column(&self, painting: &PaintingEntity) -> ColumnPos {
        let (tile_dx, _, tile_dz) = tile_offset(painting);
        let (pos_dx, _, pos_dz) = position_offset(painting);
        let (x, z) = if self.inverse {
            let tile_x = painting.tile_x - tile_dx;
            let tile_z = painting.tile_z - tile_dz;
            (tile_x as f64 - pos_dx, tile_z as f64 - pos_dz)
        } else {
            (painting.x + pos_dx, painting.z + pos_dz)
        };
        ColumnPos::containing(x.floor() as i32, z.floor() as i32)
    }

    fn apply(&self, painting: &mut PaintingEntity) {
        let (tile_dx, tile_dy, tile_dz) = tile_offset(painting);
        let (pos_dx, pos_dy, pos_dz) = position_offset(painting);
        if self.inverse {
            painting.tile_x -= tile_dx;
            painting.tile_y -= tile_dy;
            painting.tile_z -= tile_dz;
            painting.x = painting.tile_x as f64 - pos_dx;
            painting.y = painting.tile_y as f64 - pos_dy;
            painting.z = painting.tile_z as f64 - pos_dz;
        } else {
            painting.x += pos_dx;
            painting.y += pos_dy;
            painting.z += pos_dz;
            painting.tile_x = painting.x.floor() as i32 + tile_dx;
            painting.tile_y = painting.y.floor() as i32 + tile_dy;
            painting.tile_z = painting.z.floor() as i32 + tile_dz;
        }
    }
}

impl EntityPreTransformHandler for PaintingRelocator {
    fn handles(&self, entity: &Entity) -> bool {
        entity.kind() == EntityKind::Painting
    }

    fn required_edges(&self, column: &Column, entity: &Entity) -> EdgeSet {
        let Entity::Painting(painting) = entity else {
            return EdgeSet::empty();
        };
        let target = self.target_column(painting);
        let edge = Edge::from_offset(target.x - column.pos().x, target.z - column.pos().z);
        match edge {
            Some(edge) => EdgeSet::of([edge]),
            None => EdgeSet::empty(),
        }
    }

    fn handle(
        &self,
        column: &mut Column,
        neighbors: &ColumnNeighbors<'_>,
        entity: &mut Entity,
    ) -> bool {
        let Entity::Painting(painting) = entity else {
            return false;
        };
        let target = self.target_column(painting);
        if target == column.pos() {
            self.apply(painting);
            return false;
        }

        let Some(edge) = Edge::from_offset(target.x - column.pos().x, target.z - column.pos().z)
        else {
            // More than one column away: stored data is broken, leave it.
            return false;
        };
        if neighbors.get(edge).is_none() {
            // The target column does not exist; keep the painting rather
            // than orphan it.
            return false;
        }
        self.apply(painting);
        true
    }
}
