use lodestone_blocks::{BlockIdentifier, BlockType};
use lodestone_column::{Column, ColumnPos};
use proptest::prelude::*;

fn column_pos() -> impl Strategy<Value = (i32, i32)> {
    (-1000i32..=1000, -1000i32..=1000)
}

fn local() -> impl Strategy<Value = (i32, i32, i32)> {
    (0i32..16, -256i32..256, 0i32..16)
}

proptest! {
    // Writes read back through the chunk stack, at any height
    #[test]
    fn set_get_round_trip((cx, cz) in column_pos(), (lx, y, lz) in local()) {
        let pos = ColumnPos::new(cx, cz);
        let mut column = Column::new(pos);
        let x = pos.min_block_x() + lx;
        let z = pos.min_block_z() + lz;

        prop_assert!(column.get_block(x, y, z).is_air());
        let block = BlockIdentifier::new(BlockType::Stone);
        column.set_block(x, y, z, block.clone());
        prop_assert_eq!(column.get_block(x, y, z), block);

        // The write landed in exactly one chunk
        prop_assert_eq!(column.chunks().count(), 1);
        prop_assert_eq!(column.chunk((y >> 4) as i8).is_some(), true);
    }

    // Column membership matches the coordinate arithmetic
    #[test]
    fn contains_block_matches_containing((cx, cz) in column_pos(), (lx, _y, lz) in local()) {
        let pos = ColumnPos::new(cx, cz);
        let column = Column::new(pos);
        let x = pos.min_block_x() + lx;
        let z = pos.min_block_z() + lz;
        prop_assert!(column.contains_block(x, z));
        prop_assert!(!column.contains_block(x + 16, z));
        prop_assert!(!column.contains_block(x, z - 16));
    }
}

#[test]
fn block_entities_round_trip() {
    use lodestone_column::{BlockEntity, ChestBlockEntity, UnknownBlockEntity};

    let mut column = Column::new(ColumnPos::new(0, 0));
    assert!(column.block_entity(3, 64, 5).is_none());
    column.set_block_entity(3, 64, 5, BlockEntity::Chest(ChestBlockEntity::default()));
    column.set_block_entity(
        0,
        70,
        0,
        BlockEntity::Unknown(UnknownBlockEntity {
            type_name: "mod:kiln".to_owned(),
        }),
    );
    assert!(column.block_entity(3, 64, 5).is_some_and(BlockEntity::is_chest));
    assert_eq!(column.block_entities().count(), 2);
    assert!(column.remove_block_entity(3, 64, 5).is_some());
    assert!(column.block_entity(3, 64, 5).is_none());
}

#[test]
fn inserted_chunks_compact_in_place() {
    use lodestone_column::{Chunk, CHUNK_DIM};
    use lodestone_palette::Palette;

    let mut column = Column::new(ColumnPos::new(0, 0));
    let mut chunk = Chunk::new(2);
    // Attach a decoded palette the way a reader would.
    chunk.set_palette(Palette::from_parts(
        CHUNK_DIM,
        vec![BlockIdentifier::air(), BlockIdentifier::new(BlockType::Stone)],
        {
            let mut cells = vec![0u16; CHUNK_DIM * CHUNK_DIM * CHUNK_DIM];
            cells[0] = 1;
            cells
        },
    ));
    column.insert_chunk(chunk);

    // Overwrite the only stone, leaving a stale palette key behind.
    column.set_block(0, 32, 0, BlockIdentifier::new(BlockType::Dirt));
    let keys_before = column.chunk(2).unwrap().palette().key_count();
    for chunk in column.chunks_mut() {
        chunk.compact();
    }
    let chunk = column.chunk(2).unwrap();
    assert!(chunk.palette().key_count() < keys_before);
    assert_eq!(
        column.get_block(0, 32, 0),
        BlockIdentifier::new(BlockType::Dirt)
    );
}

#[test]
fn cluster_biomes_default_when_unset() {
    use lodestone_column::{Biome, ClusterBiomes, BIOME_CLUSTER_DIM};
    use lodestone_palette::Palette;

    let mut biomes = ClusterBiomes::new();
    let mut cluster = Palette::empty(BIOME_CLUSTER_DIM);
    cluster.set(1, 2, 3, Biome(7));
    biomes.push_cluster(cluster);

    let mut column = Column::new(ColumnPos::new(0, 0));
    column.set_biomes(biomes);
    let biomes = column.biomes().expect("biomes attached");
    assert_eq!(biomes.clusters().len(), 1);
    assert_eq!(biomes.get(0, 1, 2, 3), Biome(7));
    assert_eq!(biomes.get(5, 0, 0, 0), Biome::default());
}
