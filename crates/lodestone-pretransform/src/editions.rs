//! Per-edition manager factories: which handlers run for which format
//! version.

use std::sync::Arc;

use lodestone_blocks::{BlockIdentifier, BlockType, StateKey};

use crate::direction::Direction;
use crate::handlers::{
    ChestHandler, ConnectableHandler, DoorHandler, HorizontalConnectableHandler,
    PaintingRelocator, RedstoneWireHandler, StemHandler, TallPlantHandler,
};
use crate::manager::PreTransformManager;
use crate::version::Version;

const DOORS: [BlockType; 3] = [
    BlockType::OakDoor,
    BlockType::SpruceDoor,
    BlockType::IronDoor,
];

const WOODEN_FENCES: [BlockType; 2] = [BlockType::OakFence, BlockType::SpruceFence];

const TALL_PLANTS: [BlockType; 6] = [
    BlockType::Sunflower,
    BlockType::Lilac,
    BlockType::TallGrass,
    BlockType::LargeFern,
    BlockType::RoseBush,
    BlockType::Peony,
];

/// A fence connects to a gate only across the gate's opening.
fn connects_to_fence_gate(relative: &BlockIdentifier, direction: Direction) -> bool {
    if !relative.block_type().is_fence_gate() {
        return false;
    }
    relative
        .state(StateKey::FacingHorizontal)
        .and_then(|v| v.as_horizontal())
        .is_some_and(|facing| facing.is_adjacent(direction.as_facing_horizontal()))
}

fn register_tripwire(manager: &mut PreTransformManager) {
    manager.register_block_handler(
        Arc::new(HorizontalConnectableHandler::new(
            |_source: &BlockIdentifier, _direction: Direction, relative: &BlockIdentifier| {
                matches!(
                    relative.block_type(),
                    BlockType::Tripwire | BlockType::TripwireHook
                )
            },
        )),
        [BlockType::Tripwire],
    );
}

fn register_fences(manager: &mut PreTransformManager) {
    manager.register_block_handler(
        Arc::new(HorizontalConnectableHandler::new(
            |_source: &BlockIdentifier, direction: Direction, relative: &BlockIdentifier| {
                if connects_to_fence_gate(relative, direction) {
                    return true;
                }
                relative.block_type().is_wooden_fence()
                    || relative.block_type().is_all_faces_solid()
            },
        )),
        WOODEN_FENCES,
    );

    // Nether brick fences only connect to their own kind.
    manager.register_block_handler(
        Arc::new(HorizontalConnectableHandler::new(
            |_source: &BlockIdentifier, direction: Direction, relative: &BlockIdentifier| {
                if connects_to_fence_gate(relative, direction) {
                    return true;
                }
                relative.block_type() == BlockType::NetherBrickFence
                    || relative.block_type().is_all_faces_solid()
            },
        )),
        [BlockType::NetherBrickFence],
    );
}

fn register_stems(manager: &mut PreTransformManager) {
    manager.register_block_handler(
        Arc::new(StemHandler::new(BlockType::Melon)),
        [BlockType::AttachedMelonStem],
    );
    manager.register_block_handler(
        Arc::new(StemHandler::new(BlockType::Pumpkin)),
        [BlockType::AttachedPumpkinStem],
    );
}

/// Bedrock-edition handlers, run after chunks are read.
pub mod bedrock {
    use super::*;

    pub fn reader_pre_transform_manager(version: &Version) -> PreTransformManager {
        let mut manager = PreTransformManager::new();

        // Stems carry no facing on versions older than 1.16.
        if version.is_less_than(1, 16, 0) {
            register_stems(&mut manager);
        }

        register_tripwire(&mut manager);
        register_fences(&mut manager);

        // Doors store their state split across the two halves.
        manager.register_block_handler(Arc::new(DoorHandler), DOORS);

        // Chest pairing is derived from adjacency when pair data is absent.
        manager.register_block_handler(
            Arc::new(ChestHandler),
            [BlockType::Chest, BlockType::TrappedChest],
        );

        // Paintings are anchored differently and may belong to a neighbor.
        manager.register_entity_handler(Arc::new(PaintingRelocator::new(false)));

        manager
    }
}

/// Legacy Java handlers, for saves predating the 1.13 flattening.
pub mod java_legacy {
    use super::*;

    pub fn reader_pre_transform_manager(_version: &Version) -> PreTransformManager {
        let mut manager = PreTransformManager::new();

        manager.register_block_handler(
            Arc::new(ChestHandler),
            [BlockType::Chest, BlockType::TrappedChest],
        );

        manager.register_block_handler(Arc::new(TallPlantHandler), TALL_PLANTS);

        register_stems(&mut manager);
        register_tripwire(&mut manager);
        register_fences(&mut manager);

        // Chorus plants connect on all six faces, including down to end
        // stone.
        manager.register_block_handler(
            Arc::new(ConnectableHandler::new(
                |_source: &BlockIdentifier, direction: Direction, relative: &BlockIdentifier| {
                    relative.block_type() == BlockType::ChorusPlant
                        || (direction == Direction::Down
                            && relative.block_type() == BlockType::EndStone)
                },
            )),
            [BlockType::ChorusPlant],
        );

        // Wire connectivity is entirely derived in legacy saves.
        manager.register_block_handler(Arc::new(RedstoneWireHandler), [BlockType::RedstoneWire]);

        manager
    }
}
