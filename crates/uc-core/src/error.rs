//! Error types for floor generation

use thiserror::Error;

use crate::dungeon::{Coord, RoomId};

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, GenerationError>;

/// Errors raised while building a dungeon floor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A grid or room size bound is unusable. Raised before any mutation.
    #[error("invalid dimension for {what}: {value} ({reason})")]
    InvalidDimension {
        what: &'static str,
        value: i64,
        reason: &'static str,
    },

    /// A tile access fell outside the grid. Indicates a placement defect.
    #[error("coordinate ({}, {}) is outside the {width}x{height} grid", .coord.x, .coord.y)]
    OutOfBounds { coord: Coord, width: i32, height: i32 },

    /// A room slot could not be placed within its retry budget.
    /// Recovered by skipping the slot.
    #[error("room slot {slot} could not be placed after {attempts} attempts")]
    PlacementExhausted { slot: usize, attempts: usize },

    /// No wall tile of `anchor` lines up with a wall tile of `room`.
    #[error("no door alignment between room {anchor} and room {room}")]
    NoDoorAlignment { anchor: RoomId, room: RoomId },
}

impl GenerationError {
    /// Shorthand for an `InvalidDimension` error
    pub(crate) fn invalid(what: &'static str, value: impl Into<i64>, reason: &'static str) -> Self {
        GenerationError::InvalidDimension {
            what,
            value: value.into(),
            reason,
        }
    }

    /// Whether generation can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GenerationError::PlacementExhausted { .. })
    }
}
