//! uc-core: Procedural layout generation for a single dungeon floor
//!
//! This crate builds a bounded grid of tiles partitioned into rooms, walls,
//! corridors and doors, connected so every room is reachable. It contains no
//! I/O and no rendering; the resulting tile grid and room list are handed to
//! whatever presentation or gameplay layer sits on top.
//!
//! ```
//! use uc_core::{GameRng, GenerationConfig, PlacementStrategy, generate};
//!
//! let mut rng = GameRng::new(7);
//! let dungeon = generate(40, 40, 6, 4, 8, PlacementStrategy::Compact, &mut rng).unwrap();
//! assert!(!dungeon.rooms().is_empty());
//! # let _ = GenerationConfig::default();
//! ```

pub mod config;
pub mod dungeon;

mod consts;
mod error;
mod rng;

pub use config::{GenerationConfig, PlacementStrategy};
pub use consts::*;
pub use dungeon::{
    Coord, Direction, DoorLink, Dungeon, DungeonGenerator, GenerationSummary, Room, RoomId, Tile,
    TileGrid, TileObserver, TileType, generate,
};
pub use error::{GenerationError, Result};
pub use rng::GameRng;
