//! Block-adjacency directions and their edge mapping.

use lodestone_blocks::{Facing, FacingHorizontal};

use crate::edge::Edge;

/// A relative direction from one block to another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Block offset for this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::East => (1, 0, 0),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }

    /// The column edge this direction can cross; vertical directions stay
    /// within the column.
    #[inline]
    pub fn edge(self) -> Option<Edge> {
        match self {
            Direction::North => Some(Edge::NegZ),
            Direction::East => Some(Edge::PosX),
            Direction::South => Some(Edge::PosZ),
            Direction::West => Some(Edge::NegX),
            Direction::Up | Direction::Down => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The two faces perpendicular to a horizontal facing.
    pub fn adjacent_faces(facing: FacingHorizontal) -> [Direction; 2] {
        match facing {
            FacingHorizontal::North | FacingHorizontal::South => {
                [Direction::East, Direction::West]
            }
            FacingHorizontal::East | FacingHorizontal::West => {
                [Direction::North, Direction::South]
            }
        }
    }

    /// Horizontal facing for this direction; vertical directions are a
    /// caller bug.
    pub fn as_facing_horizontal(self) -> FacingHorizontal {
        match self {
            Direction::North => FacingHorizontal::North,
            Direction::East => FacingHorizontal::East,
            Direction::South => FacingHorizontal::South,
            Direction::West => FacingHorizontal::West,
            Direction::Up | Direction::Down => {
                panic!("vertical direction has no horizontal facing")
            }
        }
    }

    pub fn as_facing(self) -> Facing {
        match self {
            Direction::North => Facing::North,
            Direction::East => Facing::East,
            Direction::South => Facing::South,
            Direction::West => Facing::West,
            Direction::Up => Facing::Up,
            Direction::Down => Facing::Down,
        }
    }
}

impl From<FacingHorizontal> for Direction {
    fn from(value: FacingHorizontal) -> Self {
        match value {
            FacingHorizontal::North => Direction::North,
            FacingHorizontal::East => Direction::East,
            FacingHorizontal::South => Direction::South,
            FacingHorizontal::West => Direction::West,
        }
    }
}
