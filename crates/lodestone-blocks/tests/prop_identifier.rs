use lodestone_blocks::{BlockIdentifier, BlockType, StateKey, StateValue};
use proptest::prelude::*;

const TYPES: [BlockType; 33] = [
    BlockType::Air,
    BlockType::Stone,
    BlockType::Dirt,
    BlockType::Glass,
    BlockType::Melon,
    BlockType::Pumpkin,
    BlockType::RedstoneBlock,
    BlockType::OakDoor,
    BlockType::SpruceDoor,
    BlockType::IronDoor,
    BlockType::Chest,
    BlockType::TrappedChest,
    BlockType::RedstoneWire,
    BlockType::Repeater,
    BlockType::Observer,
    BlockType::RedstoneTorch,
    BlockType::Lever,
    BlockType::OakFence,
    BlockType::SpruceFence,
    BlockType::NetherBrickFence,
    BlockType::OakFenceGate,
    BlockType::Tripwire,
    BlockType::TripwireHook,
    BlockType::AttachedMelonStem,
    BlockType::AttachedPumpkinStem,
    BlockType::Sunflower,
    BlockType::Lilac,
    BlockType::TallGrass,
    BlockType::LargeFern,
    BlockType::RoseBush,
    BlockType::Peony,
    BlockType::ChorusPlant,
    BlockType::EndStone,
];

const KEYS: [StateKey; 18] = [
    StateKey::Half,
    StateKey::DoorHinge,
    StateKey::Open,
    StateKey::Powered,
    StateKey::Waterlogged,
    StateKey::FacingHorizontal,
    StateKey::Facing,
    StateKey::ChestKind,
    StateKey::RedstoneNorth,
    StateKey::RedstoneEast,
    StateKey::RedstoneSouth,
    StateKey::RedstoneWest,
    StateKey::North,
    StateKey::East,
    StateKey::South,
    StateKey::West,
    StateKey::Up,
    StateKey::Down,
];

fn block_type() -> impl Strategy<Value = BlockType> {
    prop::sample::select(TYPES.as_slice())
}

fn state_key() -> impl Strategy<Value = StateKey> {
    prop::sample::select(KEYS.as_slice())
}

proptest! {
    // Undeclared keys read None; declared-but-unset keys read the default
    #[test]
    fn state_reads_follow_declaration(ty in block_type(), key in state_key()) {
        let block = BlockIdentifier::new(ty);
        let expected = ty.supports(key).then(|| key.default_value());
        prop_assert_eq!(block.state(key), expected);
        prop_assert_eq!(block.raw_state(key), None);
    }

    // with_state is copy-on-write: the edit is visible on the copy only
    #[test]
    fn with_state_is_copy_on_write(ty in block_type(), key in state_key(), flag in any::<bool>()) {
        let original = BlockIdentifier::new(ty);
        let edited = original.with_state(key, StateValue::Bool(flag));
        prop_assert_eq!(edited.raw_state(key), Some(StateValue::Bool(flag)));
        prop_assert_eq!(original.raw_state(key), None);
        prop_assert_eq!(edited.block_type(), ty);
    }

    // Structural equality: same type and same set states compare equal
    #[test]
    fn equality_is_structural(ty in block_type(), key in state_key(), flag in any::<bool>()) {
        let a = BlockIdentifier::new(ty).with_state(key, StateValue::Bool(flag));
        let b = BlockIdentifier::new(ty).with_state(key, StateValue::Bool(flag));
        prop_assert_eq!(&a, &b);
        let c = b.with_state(key, StateValue::Bool(!flag));
        prop_assert_ne!(&a, &c);
    }
}
