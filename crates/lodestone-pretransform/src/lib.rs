//! Pre-transform resolution engine: handler registry and the deferred
//! scheduling that resolves block and entity state across column borders.
#![forbid(unsafe_code)]

pub mod direction;
pub mod edge;
pub mod editions;
pub mod handler;
pub mod handlers;
pub mod manager;
pub mod neighbors;
pub mod tracker;
pub mod version;

pub use direction::Direction;
pub use edge::{Edge, EdgeSet};
pub use handler::{
    calculate_edges, relative_block, relative_block_entity, BlockPreTransformHandler,
    CanConnect, EntityPreTransformHandler,
};
pub use manager::{DeferredColumn, PendingTransform, PreTransformManager, SolveResult};
pub use neighbors::ColumnNeighbors;
pub use tracker::DeferredTracker;
pub use version::Version;
