//! Entities carried by a column during conversion.

use lodestone_blocks::FacingHorizontal;

/// Painting artwork, with its size in blocks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PaintingMotive {
    Kebab,
    Aztec,
    Bomb,
    Wanderer,
    Graham,
    Courbet,
    Pool,
    SkullAndRoses,
    Wither,
    Fighters,
    Pointer,
    Pigscene,
    BurningSkull,
}

impl PaintingMotive {
    pub fn width(self) -> i32 {
        match self {
            PaintingMotive::Kebab | PaintingMotive::Aztec | PaintingMotive::Bomb => 1,
            PaintingMotive::Wanderer | PaintingMotive::Graham => 1,
            PaintingMotive::Courbet | PaintingMotive::Pool => 2,
            PaintingMotive::SkullAndRoses | PaintingMotive::Wither => 2,
            PaintingMotive::Fighters => 4,
            PaintingMotive::Pointer | PaintingMotive::Pigscene | PaintingMotive::BurningSkull => 4,
        }
    }

    pub fn height(self) -> i32 {
        match self {
            PaintingMotive::Kebab | PaintingMotive::Aztec | PaintingMotive::Bomb => 1,
            PaintingMotive::Wanderer | PaintingMotive::Graham => 2,
            PaintingMotive::Courbet | PaintingMotive::Pool => 1,
            PaintingMotive::SkullAndRoses | PaintingMotive::Wither => 2,
            PaintingMotive::Fighters => 2,
            PaintingMotive::Pointer | PaintingMotive::Pigscene | PaintingMotive::BurningSkull => 4,
        }
    }
}

/// A painting hanging on a block face.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintingEntity {
    /// Block the painting is anchored to.
    pub tile_x: i32,
    pub tile_y: i32,
    pub tile_z: i32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub facing: FacingHorizontal,
    pub motive: PaintingMotive,
}

/// An entity type the engine has no behavior for; carried through as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownEntity {
    pub type_name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Tag distinguishing entity variants, used for handler matching.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntityKind {
    Painting,
    Unknown,
}

/// An entity owned by a column.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Painting(PaintingEntity),
    Unknown(UnknownEntity),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Painting(_) => EntityKind::Painting,
            Entity::Unknown(_) => EntityKind::Unknown,
        }
    }

    /// World position of the entity.
    pub fn position(&self) -> (f64, f64, f64) {
        match self {
            Entity::Painting(p) => (p.x, p.y, p.z),
            Entity::Unknown(u) => (u.x, u.y, u.z),
        }
    }
}
