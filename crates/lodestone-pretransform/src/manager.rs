//! Handler registry and the solve/defer scheduling algorithm.

use std::sync::Arc;

use hashbrown::HashMap;
use lodestone_blocks::BlockType;
use lodestone_column::{Chunk, Column, ColumnPos, Entity, CHUNK_DIM};

use crate::edge::EdgeSet;
use crate::handler::{BlockPreTransformHandler, EntityPreTransformHandler};
use crate::neighbors::ColumnNeighbors;

/// One queued transform awaiting neighbor columns.
///
/// Queued entities are owned by the record until the deferred pass decides
/// to keep them; queued blocks re-fetch their identifier when they run, so
/// interim edits by other handlers are respected.
pub enum PendingTransform {
    Block {
        x: i32,
        y: i32,
        z: i32,
        handler: Arc<dyn BlockPreTransformHandler>,
    },
    Entity {
        entity: Entity,
        handler: Arc<dyn EntityPreTransformHandler>,
    },
}

/// The deferred remainder of a solve pass: the edges still required and
/// the transforms to run once they settle.
///
/// Held by the loader and passed back to [`PreTransformManager::solve_edges`]
/// by value, so every queued transform executes at most once.
pub struct DeferredColumn {
    edges: EdgeSet,
    pending: Vec<PendingTransform>,
}

impl DeferredColumn {
    /// Union of the edges required by the queued transforms.
    pub fn edges(&self) -> EdgeSet {
        self.edges
    }

    pub fn pending(&self) -> &[PendingTransform] {
        &self.pending
    }
}

/// Outcome of the immediate solve pass.
pub struct SolveResult {
    /// Work that needs neighbor columns, if any.
    pub deferred: Option<DeferredColumn>,
    /// Entities whose handlers moved them out of this column, with the
    /// column that now owns them. The loader transfers these; the engine
    /// never mutates a neighbor.
    pub relocated: Vec<(ColumnPos, Entity)>,
}

/// Registry of pre-transform handlers plus the solve orchestration.
///
/// Built once per format version and read-only afterwards, so one manager
/// may be shared across any number of columns solved in parallel.
#[derive(Default)]
pub struct PreTransformManager {
    block_handlers: HashMap<BlockType, Arc<dyn BlockPreTransformHandler>>,
    entity_handlers: Vec<Arc<dyn EntityPreTransformHandler>>,
}

impl PreTransformManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block handler for each of the given types. A later
    /// registration for a type replaces the earlier one.
    pub fn register_block_handler(
        &mut self,
        handler: Arc<dyn BlockPreTransformHandler>,
        block_types: impl IntoIterator<Item = BlockType>,
    ) {
        for block_type in block_types {
            self.block_handlers.insert(block_type, handler.clone());
        }
    }

    /// Register an entity handler. Handlers are matched in registration
    /// order; the first whose `handles` accepts an entity wins.
    pub fn register_entity_handler(&mut self, handler: Arc<dyn EntityPreTransformHandler>) {
        self.entity_handlers.push(handler);
    }

    /// Whether the chunk's palette holds any handled block type. Scans the
    /// deduplicated key list only, never the cube, so chunks without
    /// connectable content are skipped wholesale.
    fn contains_handled_block(&self, chunk: &Chunk) -> bool {
        chunk
            .palette()
            .contains_key(|block| self.block_handlers.contains_key(&block.block_type()))
    }

    /// Resolve a column, queueing anything that needs neighbors.
    ///
    /// With `pre_transform_allowed` false every transform runs immediately
    /// with an empty neighbor map and nothing is deferred.
    pub fn solve(&self, column: &mut Column, pre_transform_allowed: bool) -> SolveResult {
        let mut pending = Vec::new();
        let mut edges = EdgeSet::empty();
        let mut relocated = Vec::new();

        self.solve_entities(
            column,
            pre_transform_allowed,
            &mut pending,
            &mut edges,
            &mut relocated,
        );
        self.solve_blocks(column, pre_transform_allowed, &mut pending, &mut edges);

        let deferred = if pending.is_empty() {
            None
        } else {
            log::debug!(
                target: "pretransform",
                "column ({}, {}) deferred {} transform(s) on {:?}",
                column.pos().x,
                column.pos().z,
                pending.len(),
                edges,
            );
            Some(DeferredColumn { edges, pending })
        };
        SolveResult {
            deferred,
            relocated,
        }
    }

    fn solve_entities(
        &self,
        column: &mut Column,
        pre_transform_allowed: bool,
        pending: &mut Vec<PendingTransform>,
        edges: &mut EdgeSet,
        relocated: &mut Vec<(ColumnPos, Entity)>,
    ) {
        let mut index = 0;
        while index < column.entities().len() {
            let Some(handler) = self
                .entity_handlers
                .iter()
                .find(|handler| handler.handles(&column.entities()[index]))
                .cloned()
            else {
                index += 1;
                continue;
            };

            let required = if pre_transform_allowed {
                handler.required_edges(column, &column.entities()[index])
            } else {
                EdgeSet::empty()
            };

            if required.is_empty() {
                let mut entity = column.take_entity(index);
                let remove = handler.handle(column, &ColumnNeighbors::empty(), &mut entity);
                if remove {
                    finish_removed_entity(column, entity, relocated);
                } else {
                    column.insert_entity(index, entity);
                    index += 1;
                }
            } else {
                *edges = edges.union(required);
                pending.push(PendingTransform::Entity {
                    entity: column.take_entity(index),
                    handler,
                });
            }
        }
    }

    fn solve_blocks(
        &self,
        column: &mut Column,
        pre_transform_allowed: bool,
        pending: &mut Vec<PendingTransform>,
        edges: &mut EdgeSet,
    ) {
        let base_x = column.pos().min_block_x();
        let base_z = column.pos().min_block_z();
        let chunk_ys: Vec<i8> = column.chunks().map(|chunk| chunk.y()).collect();

        for chunk_y in chunk_ys {
            {
                let chunk = column.chunk(chunk_y).expect("chunk present");
                if !self.contains_handled_block(chunk) {
                    continue;
                }
            }

            for local_y in 0..CHUNK_DIM {
                for local_x in 0..CHUNK_DIM {
                    for local_z in 0..CHUNK_DIM {
                        let chunk = column.chunk(chunk_y).expect("chunk present");
                        let block = chunk.get_block(local_x, local_y, local_z);
                        let Some(handler) = self.block_handlers.get(&block.block_type()) else {
                            continue;
                        };

                        let x = base_x | local_x as i32;
                        let y = (chunk_y as i32) << 4 | local_y as i32;
                        let z = base_z | local_z as i32;

                        let required = if pre_transform_allowed {
                            handler.required_edges(column, x, y, z, &block)
                        } else {
                            EdgeSet::empty()
                        };

                        if required.is_empty() {
                            let handled =
                                handler.handle(column, &ColumnNeighbors::empty(), x, y, z, block.clone());
                            // Equality check avoids needless palette churn.
                            if handled != block {
                                column.set_block(x, y, z, handled);
                            }
                        } else {
                            *edges = edges.union(required);
                            pending.push(PendingTransform::Block {
                                x,
                                y,
                                z,
                                handler: handler.clone(),
                            });
                        }
                    }
                }
            }
        }
    }

    /// Run the deferred transforms with the neighbor columns that settled.
    ///
    /// Some declared edges may be absent from `neighbors` (the neighbor
    /// does not exist); handlers fall back to air for those lookups. The
    /// record is consumed, so no transform can run twice.
    pub fn solve_edges(
        &self,
        column: &mut Column,
        neighbors: &ColumnNeighbors<'_>,
        deferred: DeferredColumn,
    ) -> Vec<(ColumnPos, Entity)> {
        let mut relocated = Vec::new();
        for transform in deferred.pending {
            match transform {
                PendingTransform::Block { x, y, z, handler } => {
                    // Re-fetch: another handler may have rewritten it since
                    // the immediate pass.
                    let block = column.get_block(x, y, z);
                    let handled = handler.handle(column, neighbors, x, y, z, block.clone());
                    if handled != block {
                        column.set_block(x, y, z, handled);
                    }
                }
                PendingTransform::Entity {
                    mut entity,
                    handler,
                } => {
                    let remove = handler.handle(column, neighbors, &mut entity);
                    if remove {
                        finish_removed_entity(column, entity, &mut relocated);
                    } else {
                        column.add_entity(entity);
                    }
                }
            }
        }
        relocated
    }
}

/// A removed entity whose position left the column is a relocation; the
/// rest are consumed (converted or dropped) and owned by their handler's
/// edits to the column.
fn finish_removed_entity(
    column: &Column,
    entity: Entity,
    relocated: &mut Vec<(ColumnPos, Entity)>,
) {
    let (x, _, z) = entity.position();
    let target = ColumnPos::containing(x.floor() as i32, z.floor() as i32);
    if target != column.pos() {
        relocated.push((target, entity));
    }
}
