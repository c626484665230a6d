//! Generation parameters
//!
//! `GenerationConfig` is plain data: it can be built in code, deserialized
//! from JSON by a front end, and validated before any grid is allocated.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::consts::{
    DEFAULT_ATTEMPTS_PER_ROOM, DEFAULT_GRID_SIZE, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_SIZE,
    DEFAULT_ROOM_COUNT, MIN_DOOR_ROOM_SIZE,
};
use crate::error::{GenerationError, Result};

/// Room placement algorithm
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlacementStrategy {
    /// Independent random rectangles, rejected on overlap, linked to the
    /// previously placed room by an L-shaped corridor.
    Scatter,
    /// Rooms placed flush against a random existing room and linked to it
    /// by a pair of doors.
    #[default]
    Compact,
}

/// Parameters for one floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Grid width in tiles
    pub width: i32,
    /// Grid height in tiles
    pub height: i32,
    /// Number of room slots to attempt
    pub room_count: usize,
    /// Smallest room side, walls included
    pub min_room_size: i32,
    /// Largest room side, walls included
    pub max_room_size: i32,
    /// Placement algorithm
    pub strategy: PlacementStrategy,
    /// Random attempts per slot (scatter placement only)
    pub attempts_per_room: usize,
    /// Fixed seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            room_count: DEFAULT_ROOM_COUNT,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            strategy: PlacementStrategy::default(),
            attempts_per_room: DEFAULT_ATTEMPTS_PER_ROOM,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Create a config from the six core generation parameters
    pub fn new(
        width: i32,
        height: i32,
        room_count: usize,
        min_room_size: i32,
        max_room_size: i32,
        strategy: PlacementStrategy,
    ) -> Self {
        Self {
            width,
            height,
            room_count,
            min_room_size,
            max_room_size,
            strategy,
            ..Self::default()
        }
    }

    /// Builder-style seed setter
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style attempt budget setter
    #[must_use]
    pub fn with_attempts(mut self, attempts_per_room: usize) -> Self {
        self.attempts_per_room = attempts_per_room;
        self
    }

    /// Check every bound. Called before any grid allocation.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 {
            return Err(GenerationError::invalid("width", self.width, "must be positive"));
        }
        if self.height <= 0 {
            return Err(GenerationError::invalid("height", self.height, "must be positive"));
        }
        if self.min_room_size <= 0 {
            return Err(GenerationError::invalid(
                "min_room_size",
                self.min_room_size,
                "must be positive",
            ));
        }
        if self.min_room_size > self.max_room_size {
            return Err(GenerationError::invalid(
                "max_room_size",
                self.max_room_size,
                "must not be smaller than min_room_size",
            ));
        }
        if self.attempts_per_room == 0 {
            return Err(GenerationError::invalid(
                "attempts_per_room",
                0,
                "must be positive",
            ));
        }
        if self.strategy == PlacementStrategy::Compact && self.min_room_size < MIN_DOOR_ROOM_SIZE {
            return Err(GenerationError::invalid(
                "min_room_size",
                self.min_room_size,
                "compact placement needs rooms of at least 3 tiles per side",
            ));
        }
        Ok(())
    }
}
