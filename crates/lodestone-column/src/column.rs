use std::collections::BTreeMap;

use hashbrown::HashMap;
use lodestone_blocks::BlockIdentifier;

use crate::biome::ClusterBiomes;
use crate::block_entity::BlockEntity;
use crate::chunk::Chunk;
use crate::coord::ColumnPos;
use crate::entity::Entity;

/// A 16x16 block region: a height-ordered stack of chunks plus the
/// entities and block entities inside it.
///
/// Created empty by a reader, populated as chunk data is decoded, resolved
/// once by the pre-transform engine, then handed to a writer.
#[derive(Clone, Debug, Default)]
pub struct Column {
    pos: ColumnPos,
    chunks: BTreeMap<i8, Chunk>,
    entities: Vec<Entity>,
    block_entities: HashMap<(i32, i32, i32), BlockEntity>,
    biomes: Option<ClusterBiomes>,
}

impl Column {
    pub fn new(pos: ColumnPos) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    #[inline]
    pub fn pos(&self) -> ColumnPos {
        self.pos
    }

    /// True when a world block position falls inside this column.
    #[inline]
    pub fn contains_block(&self, x: i32, z: i32) -> bool {
        ColumnPos::containing(x, z) == self.pos
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn chunks_mut(&mut self) -> impl Iterator<Item = &mut Chunk> {
        self.chunks.values_mut()
    }

    pub fn chunk(&self, y: i8) -> Option<&Chunk> {
        self.chunks.get(&y)
    }

    pub fn insert_chunk(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.y(), chunk);
    }

    /// Read a block by world coordinates; missing chunks read as air.
    ///
    /// X/Z are masked into the column, so callers pass untranslated world
    /// positions.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockIdentifier {
        match self.chunks.get(&((y >> 4) as i8)) {
            Some(chunk) => chunk.get_block(
                (x & 15) as usize,
                (y & 15) as usize,
                (z & 15) as usize,
            ),
            None => BlockIdentifier::air(),
        }
    }

    /// Write a block by world coordinates, creating the chunk if needed.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockIdentifier) {
        let chunk_y = (y >> 4) as i8;
        let chunk = self
            .chunks
            .entry(chunk_y)
            .or_insert_with(|| Chunk::new(chunk_y));
        chunk.set_block(
            (x & 15) as usize,
            (y & 15) as usize,
            (z & 15) as usize,
            block,
        );
    }

    pub fn block_entity(&self, x: i32, y: i32, z: i32) -> Option<&BlockEntity> {
        self.block_entities.get(&(x, y, z))
    }

    pub fn set_block_entity(&mut self, x: i32, y: i32, z: i32, block_entity: BlockEntity) {
        self.block_entities.insert((x, y, z), block_entity);
    }

    pub fn remove_block_entity(&mut self, x: i32, y: i32, z: i32) -> Option<BlockEntity> {
        self.block_entities.remove(&(x, y, z))
    }

    pub fn block_entities(&self) -> impl Iterator<Item = (&(i32, i32, i32), &BlockEntity)> {
        self.block_entities.iter()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove and return the entity at `index`, preserving order.
    pub fn take_entity(&mut self, index: usize) -> Entity {
        self.entities.remove(index)
    }

    /// Put an entity back at `index` (inverse of `take_entity`).
    pub fn insert_entity(&mut self, index: usize, entity: Entity) {
        self.entities.insert(index, entity);
    }

    pub fn biomes(&self) -> Option<&ClusterBiomes> {
        self.biomes.as_ref()
    }

    pub fn set_biomes(&mut self, biomes: ClusterBiomes) {
        self.biomes = Some(biomes);
    }
}
