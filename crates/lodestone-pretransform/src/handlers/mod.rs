//! The worked pre-transform handler catalogue.

pub mod chest;
pub mod connectable;
pub mod door;
pub mod painting;
pub mod redstone;
pub mod stem;
pub mod tall_plant;

pub use chest::ChestHandler;
pub use connectable::{ConnectableHandler, HorizontalConnectableHandler};
pub use door::DoorHandler;
pub use painting::PaintingRelocator;
pub use redstone::RedstoneWireHandler;
pub use stem::StemHandler;
pub use tall_plant::TallPlantHandler;
