//! Dungeon floor layout: grid, rooms and how they are joined

mod coord;
pub mod connectivity;
pub mod corridor;
pub mod doors;
mod generation;
mod grid;
mod level;
pub mod placement;
mod room;
mod tile;

pub use coord::{Coord, Direction};
pub use generation::{DungeonGenerator, GenerationSummary, generate};
pub use grid::{TileGrid, TileObserver};
pub use level::Dungeon;
pub use placement::{CompactPlacer, Constraints, Link, Placement, RoomPlacer, ScatterPlacer};
pub use room::{Room, RoomId};
pub use tile::{DoorLink, Tile, TileType};
