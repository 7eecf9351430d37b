use serde::{Deserialize, Serialize};

/// Position of a column in the world, in chunk coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnPos {
    pub x: i32,
    pub z: i32,
}

impl ColumnPos {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The column containing a world block position.
    #[inline]
    pub const fn containing(block_x: i32, block_z: i32) -> Self {
        Self {
            x: block_x >> 4,
            z: block_z >> 4,
        }
    }

    #[inline]
    pub const fn min_block_x(self) -> i32 {
        self.x << 4
    }

    #[inline]
    pub const fn min_block_z(self) -> i32 {
        self.z << 4
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl From<(i32, i32)> for ColumnPos {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ColumnPos> for (i32, i32) {
    fn from(value: ColumnPos) -> Self {
        (value.x, value.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_handles_negatives() {
        assert_eq!(ColumnPos::containing(0, 0), ColumnPos::new(0, 0));
        assert_eq!(ColumnPos::containing(15, 31), ColumnPos::new(0, 1));
        assert_eq!(ColumnPos::containing(-1, -16), ColumnPos::new(-1, -1));
        assert_eq!(ColumnPos::containing(-17, -33), ColumnPos::new(-2, -3));
    }
}
