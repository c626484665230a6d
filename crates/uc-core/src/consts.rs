//! Generation constants
//!
//! Default parameters mirror the values the floor generator has always
//! shipped with.

/// Default grid width and height
pub const DEFAULT_GRID_SIZE: i32 = 128;

/// Default number of room slots per floor
pub const DEFAULT_ROOM_COUNT: usize = 8;

/// Default smallest room side length, walls included
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 5;

/// Default largest room side length, walls included
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 15;

/// Random placement attempts per room slot for scatter placement
pub const DEFAULT_ATTEMPTS_PER_ROOM: usize = 10;

/// Smallest room side that still leaves a non-corner wall tile for a door
pub const MIN_DOOR_ROOM_SIZE: i32 = 3;
