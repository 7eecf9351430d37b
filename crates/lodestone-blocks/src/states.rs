//! Typed block state keys and values.

use serde::{Deserialize, Serialize};

/// Vertical half of a two-block-tall block (doors, tall plants).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Half {
    Top,
    Bottom,
}

/// Which side a door's hinge sits on, viewed from the outside.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum HingeSide {
    Left,
    Right,
}

/// Whether a chest is standalone or one half of a double chest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum ChestKind {
    Single,
    Left,
    Right,
}

/// How redstone wire visually connects on one side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum RedstoneConnection {
    None,
    Side,
    Up,
}

/// Cardinal facing used by chests, repeaters, stems, and fence gates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum FacingHorizontal {
    North,
    East,
    South,
    West,
}

impl FacingHorizontal {
    /// Block offset of this facing on the X/Z plane.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            FacingHorizontal::North => (0, -1),
            FacingHorizontal::East => (1, 0),
            FacingHorizontal::South => (0, 1),
            FacingHorizontal::West => (-1, 0),
        }
    }

    pub fn rotate_clockwise(self) -> Self {
        match self {
            FacingHorizontal::North => FacingHorizontal::East,
            FacingHorizontal::East => FacingHorizontal::South,
            FacingHorizontal::South => FacingHorizontal::West,
            FacingHorizontal::West => FacingHorizontal::North,
        }
    }

    pub fn rotate_anticlockwise(self) -> Self {
        match self {
            FacingHorizontal::North => FacingHorizontal::West,
            FacingHorizontal::West => FacingHorizontal::South,
            FacingHorizontal::South => FacingHorizontal::East,
            FacingHorizontal::East => FacingHorizontal::North,
        }
    }

    pub fn opposite(self) -> Self {
        self.rotate_clockwise().rotate_clockwise()
    }

    /// True when `other` is perpendicular to this facing, e.g. adjacent to
    /// NORTH is EAST and WEST.
    pub fn is_adjacent(self, other: Self) -> bool {
        self != other && self.opposite() != other
    }
}

/// Six-way facing used by observers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Facing {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl From<FacingHorizontal> for Facing {
    fn from(value: FacingHorizontal) -> Self {
        match value {
            FacingHorizontal::North => Facing::North,
            FacingHorizontal::East => Facing::East,
            FacingHorizontal::South => Facing::South,
            FacingHorizontal::West => Facing::West,
        }
    }
}

/// A block state key. Only meaningful for block types that declare support
/// for it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum StateKey {
    Half,
    DoorHinge,
    Open,
    Powered,
    Waterlogged,
    FacingHorizontal,
    Facing,
    ChestKind,
    RedstoneNorth,
    RedstoneEast,
    RedstoneSouth,
    RedstoneWest,
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl StateKey {
    /// The value a declared-but-unset key reads as.
    pub fn default_value(self) -> StateValue {
        match self {
            StateKey::Half => StateValue::Half(Half::Bottom),
            StateKey::DoorHinge => StateValue::Hinge(HingeSide::Left),
            StateKey::Open
            | StateKey::Powered
            | StateKey::Waterlogged
            | StateKey::North
            | StateKey::East
            | StateKey::South
            | StateKey::West
            | StateKey::Up
            | StateKey::Down => StateValue::Bool(false),
            StateKey::FacingHorizontal => StateValue::Horizontal(FacingHorizontal::North),
            StateKey::Facing => StateValue::Facing(Facing::North),
            StateKey::ChestKind => StateValue::Chest(ChestKind::Single),
            StateKey::RedstoneNorth
            | StateKey::RedstoneEast
            | StateKey::RedstoneSouth
            | StateKey::RedstoneWest => StateValue::Redstone(RedstoneConnection::None),
        }
    }
}

/// A block state value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum StateValue {
    Bool(bool),
    Half(Half),
    Hinge(HingeSide),
    Horizontal(FacingHorizontal),
    Facing(Facing),
    Chest(ChestKind),
    Redstone(RedstoneConnection),
}

impl StateValue {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            StateValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_half(self) -> Option<Half> {
        match self {
            StateValue::Half(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_hinge(self) -> Option<HingeSide> {
        match self {
            StateValue::Hinge(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_horizontal(self) -> Option<FacingHorizontal> {
        match self {
            StateValue::Horizontal(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_facing(self) -> Option<Facing> {
        match self {
            StateValue::Facing(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_chest(self) -> Option<ChestKind> {
        match self {
            StateValue::Chest(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_redstone(self) -> Option<RedstoneConnection> {
        match self {
            StateValue::Redstone(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_cycle() {
        for facing in [
            FacingHorizontal::North,
            FacingHorizontal::East,
            FacingHorizontal::South,
            FacingHorizontal::West,
        ] {
            assert_eq!(facing.rotate_clockwise().rotate_anticlockwise(), facing);
            assert_eq!(facing.opposite().opposite(), facing);
        }
    }

    #[test]
    fn adjacency_is_perpendicular() {
        assert!(FacingHorizontal::North.is_adjacent(FacingHorizontal::East));
        assert!(FacingHorizontal::North.is_adjacent(FacingHorizontal::West));
        assert!(!FacingHorizontal::North.is_adjacent(FacingHorizontal::North));
        assert!(!FacingHorizontal::North.is_adjacent(FacingHorizontal::South));
    }

    #[test]
    fn accessors_match_their_variant() {
        assert_eq!(StateValue::Bool(true).as_bool(), Some(true));
        assert_eq!(StateValue::Bool(true).as_half(), None);
        assert_eq!(
            StateValue::Hinge(HingeSide::Right).as_hinge(),
            Some(HingeSide::Right)
        );
        assert_eq!(
            StateValue::Redstone(RedstoneConnection::Up).as_bool(),
            None
        );
    }

    #[test]
    fn horizontal_widens_to_facing() {
        assert_eq!(Facing::from(FacingHorizontal::West), Facing::West);
        assert_eq!(Facing::from(FacingHorizontal::North), Facing::North);
    }
}
