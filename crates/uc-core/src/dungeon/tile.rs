//! Tile types and tile records

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Coord, RoomId};

/// Tile classification
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Void = 0,
    Floor = 1,
    NorthWall = 2,
    NorthEastCorner = 3,
    EastWall = 4,
    SouthEastCorner = 5,
    SouthWall = 6,
    SouthWestCorner = 7,
    WestWall = 8,
    NorthWestCorner = 9,
    Corridor = 10,
    Door = 11,
}

impl TileType {
    /// Check if this is a straight wall segment
    pub const fn is_wall(&self) -> bool {
        matches!(
            self,
            TileType::NorthWall | TileType::EastWall | TileType::SouthWall | TileType::WestWall
        )
    }

    /// Check if this is a room corner
    pub const fn is_corner(&self) -> bool {
        matches!(
            self,
            TileType::NorthEastCorner
                | TileType::SouthEastCorner
                | TileType::SouthWestCorner
                | TileType::NorthWestCorner
        )
    }

    /// Check if this tile is part of a room boundary
    pub const fn is_boundary(&self) -> bool {
        self.is_wall() || self.is_corner()
    }

    /// Check if a physics layer should give this tile a collider
    pub const fn is_solid(&self) -> bool {
        self.is_boundary()
    }

    /// Check if this is passable (can walk through)
    pub const fn is_passable(&self) -> bool {
        matches!(self, TileType::Floor | TileType::Corridor | TileType::Door)
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Void => ' ',
            TileType::Floor => '.',
            TileType::NorthWall | TileType::SouthWall => '-',
            TileType::EastWall | TileType::WestWall => '|',
            TileType::NorthEastCorner
            | TileType::SouthEastCorner
            | TileType::SouthWestCorner
            | TileType::NorthWestCorner => '+',
            TileType::Corridor => '#',
            TileType::Door => 'D',
        }
    }

    /// Classify a room tile from which room edges it lies on.
    ///
    /// Tiles on two opposite edges at once (rooms one tile thick) are floor.
    pub const fn classify(west: bool, east: bool, south: bool, north: bool) -> TileType {
        match (west, east, south, north) {
            (true, false, false, true) => TileType::NorthWestCorner,
            (false, false, false, true) => TileType::NorthWall,
            (false, true, false, true) => TileType::NorthEastCorner,
            (false, true, false, false) => TileType::EastWall,
            (false, true, true, false) => TileType::SouthEastCorner,
            (false, false, true, false) => TileType::SouthWall,
            (true, false, true, false) => TileType::SouthWestCorner,
            (true, false, false, false) => TileType::WestWall,
            _ => TileType::Floor,
        }
    }
}

/// Where a door leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorLink {
    /// Room on the other side
    pub room: RoomId,
    /// The paired door tile in that room
    pub partner: Coord,
    /// Tile an entity arrives on after passing through
    pub arrival: Coord,
}

/// A single grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Grid position
    pub coord: Coord,
    /// Current classification
    pub typ: TileType,
    /// Room that owns this tile, if any
    pub room: Option<RoomId>,
    /// Destination for linked doors
    pub link: Option<DoorLink>,
}

impl Tile {
    /// Create a new void tile
    pub const fn void(coord: Coord) -> Self {
        Self {
            coord,
            typ: TileType::Void,
            room: None,
            link: None,
        }
    }

    pub const fn is_door(&self) -> bool {
        matches!(self.typ, TileType::Door)
    }
}
