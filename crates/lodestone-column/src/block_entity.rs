//! Block entities carried by a column during conversion.

/// Container data for a chest block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChestBlockEntity {
    pub custom_name: Option<String>,
}

/// A block entity type the engine has no behavior for.
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownBlockEntity {
    pub type_name: String,
}

/// A block entity owned by a column, keyed by its block position.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockEntity {
    Chest(ChestBlockEntity),
    Unknown(UnknownBlockEntity),
}

impl BlockEntity {
    pub fn is_chest(&self) -> bool {
        matches!(self, BlockEntity::Chest(_))
    }
}
