//! The vanilla block type catalogue used by the conversion engine.

use serde::{Deserialize, Serialize};

use crate::states::StateKey;

/// A vanilla block type.
///
/// Closed catalogue: format readers map raw identifiers onto these before
/// the engine runs, and anything unmapped travels as a preserved
/// identifier on the block instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum BlockType {
    Air,
    Stone,
    Dirt,
    Glass,
    Melon,
    Pumpkin,
    RedstoneBlock,
    OakDoor,
    SpruceDoor,
    IronDoor,
    Chest,
    TrappedChest,
    RedstoneWire,
    Repeater,
    Observer,
    RedstoneTorch,
    Lever,
    OakFence,
    SpruceFence,
    NetherBrickFence,
    OakFenceGate,
    Tripwire,
    TripwireHook,
    AttachedMelonStem,
    AttachedPumpkinStem,
    Sunflower,
    Lilac,
    TallGrass,
    LargeFern,
    RoseBush,
    Peony,
    ChorusPlant,
    EndStone,
}

impl BlockType {
    /// Whether every face of this block is a full opaque square.
    pub fn is_all_faces_solid(self) -> bool {
        matches!(
            self,
            BlockType::Stone
                | BlockType::Dirt
                | BlockType::Melon
                | BlockType::Pumpkin
                | BlockType::RedstoneBlock
                | BlockType::EndStone
        )
    }

    pub fn is_door(self) -> bool {
        matches!(
            self,
            BlockType::OakDoor | BlockType::SpruceDoor | BlockType::IronDoor
        )
    }

    pub fn is_wooden_fence(self) -> bool {
        matches!(self, BlockType::OakFence | BlockType::SpruceFence)
    }

    pub fn is_fence_gate(self) -> bool {
        matches!(self, BlockType::OakFenceGate)
    }

    pub fn is_chest(self) -> bool {
        matches!(self, BlockType::Chest | BlockType::TrappedChest)
    }

    pub fn is_tall_plant(self) -> bool {
        matches!(
            self,
            BlockType::Sunflower
                | BlockType::Lilac
                | BlockType::TallGrass
                | BlockType::LargeFern
                | BlockType::RoseBush
                | BlockType::Peony
        )
    }

    /// Blocks redstone wire may visually connect to.
    pub fn is_redstone_connectable(self) -> bool {
        matches!(
            self,
            BlockType::RedstoneWire
                | BlockType::Repeater
                | BlockType::Observer
                | BlockType::RedstoneTorch
                | BlockType::RedstoneBlock
                | BlockType::Lever
        )
    }

    /// Whether this type declares the given state key.
    pub fn supports(self, key: StateKey) -> bool {
        use StateKey::*;
        match self {
            BlockType::OakDoor | BlockType::SpruceDoor | BlockType::IronDoor => matches!(
                key,
                Half | DoorHinge | Open | Powered | FacingHorizontal
            ),
            BlockType::Chest | BlockType::TrappedChest => {
                matches!(key, FacingHorizontal | ChestKind | Waterlogged)
            }
            BlockType::RedstoneWire => matches!(
                key,
                RedstoneNorth | RedstoneEast | RedstoneSouth | RedstoneWest
            ),
            BlockType::Repeater => matches!(key, FacingHorizontal | Powered),
            BlockType::Observer => matches!(key, Facing | Powered),
            BlockType::RedstoneTorch | BlockType::Lever => matches!(key, Powered),
            BlockType::OakFence | BlockType::SpruceFence | BlockType::NetherBrickFence => {
                matches!(key, North | East | South | West | Waterlogged)
            }
            BlockType::Tripwire => matches!(key, North | East | South | West | Powered),
            BlockType::TripwireHook => matches!(key, FacingHorizontal | Powered),
            BlockType::OakFenceGate => matches!(key, FacingHorizontal | Open | Powered),
            BlockType::AttachedMelonStem | BlockType::AttachedPumpkinStem => {
                matches!(key, FacingHorizontal)
            }
            BlockType::Sunflower
            | BlockType::Lilac
            | BlockType::TallGrass
            | BlockType::LargeFern
            | BlockType::RoseBush
            | BlockType::Peony => matches!(key, Half),
            BlockType::ChorusPlant => {
                matches!(key, North | East | South | West | Up | Down)
            }
            BlockType::Air
            | BlockType::Stone
            | BlockType::Dirt
            | BlockType::Glass
            | BlockType::Melon
            | BlockType::Pumpkin
            | BlockType::RedstoneBlock
            | BlockType::EndStone => false,
        }
    }
}
