//! Rooms
//!
//! A room is an axis-aligned rectangle of tiles. Its outermost ring is wall
//! (four corners and four straight runs) and the interior is floor. Sizes
//! include the walls.

use core::fmt;
use core::ops::Range;

use serde::{Deserialize, Serialize};

use super::{Coord, Direction, TileGrid, TileType};
use crate::error::Result;

/// Index of an accepted room in the dungeon's room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rectangle representing a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// South-west corner of the room
    origin: Coord,
    /// Width including walls
    width: i32,
    /// Height including walls
    height: i32,
}

impl Room {
    /// Create a room at `origin` spanning `width x height` tiles
    pub const fn new(origin: Coord, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> Coord {
        self.origin
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Half-open x extent
    pub const fn x_range(&self) -> Range<i32> {
        self.origin.x..self.origin.x + self.width
    }

    /// Half-open y extent
    pub const fn y_range(&self) -> Range<i32> {
        self.origin.y..self.origin.y + self.height
    }

    /// Floor of the rectangle midpoint on each axis
    pub const fn center(&self) -> Coord {
        Coord {
            x: (2 * self.origin.x + self.width).div_euclid(2),
            y: (2 * self.origin.y + self.height).div_euclid(2),
        }
    }

    /// Number of tiles covered, walls included
    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Check if a coordinate is inside the room rectangle
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.origin.x
            && coord.x < self.origin.x + self.width
            && coord.y >= self.origin.y
            && coord.y < self.origin.y + self.height
    }

    /// Check if this room shares any tile with another
    pub fn overlaps(&self, other: &Room) -> bool {
        ranges_intersect(&self.x_range(), &other.x_range())
            && ranges_intersect(&self.y_range(), &other.y_range())
    }

    /// Side of this room that `other` sits flush against, if any.
    ///
    /// Flush means the rooms do not overlap, their facing boundaries are one
    /// tile apart, and their extents on the other axis share at least one row
    /// or column.
    pub fn adjacent_side(&self, other: &Room) -> Option<Direction> {
        if self.overlaps(other) {
            return None;
        }
        let xs = self.x_range();
        let ys = self.y_range();
        let oxs = other.x_range();
        let oys = other.y_range();

        if ranges_intersect(&xs, &oxs) {
            if ys.end == oys.start {
                return Some(Direction::North);
            }
            if oys.end == ys.start {
                return Some(Direction::South);
            }
        }
        if ranges_intersect(&ys, &oys) {
            if xs.end == oxs.start {
                return Some(Direction::East);
            }
            if oxs.end == xs.start {
                return Some(Direction::West);
            }
        }
        None
    }

    /// Check if another room sits flush against one of this room's sides
    pub fn is_adjacent_to(&self, other: &Room) -> bool {
        self.adjacent_side(other).is_some()
    }

    /// Origin of a `width x height` room placed flush against this room's
    /// `direction` side, sharing this room's origin on the other axis.
    pub const fn adjacent_origin(&self, width: i32, height: i32, direction: Direction) -> Coord {
        let Coord { x, y } = self.origin;
        match direction {
            Direction::North => Coord::new(x, y + self.height),
            Direction::East => Coord::new(x + self.width, y),
            Direction::South => Coord::new(x, y - height),
            Direction::West => Coord::new(x - width, y),
        }
    }

    /// Classification of a tile of this room from its position
    pub const fn classify(&self, coord: Coord) -> TileType {
        TileType::classify(
            coord.x == self.origin.x,
            coord.x == self.origin.x + self.width - 1,
            coord.y == self.origin.y,
            coord.y == self.origin.y + self.height - 1,
        )
    }

    /// Iterate over every coordinate of the room, column by column
    pub fn tiles(&self) -> impl Iterator<Item = Coord> + use<> {
        let ys = self.y_range();
        self.x_range()
            .flat_map(move |x| ys.clone().map(move |y| Coord::new(x, y)))
    }

    /// Write this room's tile classifications into the grid.
    ///
    /// Must run exactly once, after the room has been validated against the
    /// grid bounds and every other accepted room. Boundary tiles laid over an
    /// existing corridor become doorways so the corridor stays walkable.
    pub fn init(&self, id: RoomId, grid: &mut TileGrid) -> Result<()> {
        for coord in self.tiles() {
            let mut typ = self.classify(coord);
            if typ.is_boundary() && grid.type_at(coord)? == TileType::Corridor {
                typ = TileType::Door;
            }
            grid.claim(coord, id, typ)?;
        }
        Ok(())
    }

    /// Wall tiles of one side, corners excluded, ordered by increasing x
    /// (north/south sides) or increasing y (east/west sides).
    pub fn wall_tiles(&self, side: Direction) -> Vec<Coord> {
        let Coord { x, y } = self.origin;
        let (w, h) = (self.width, self.height);
        match side {
            Direction::North => (x + 1..x + w - 1).map(|cx| Coord::new(cx, y + h - 1)).collect(),
            Direction::South => (x + 1..x + w - 1).map(|cx| Coord::new(cx, y)).collect(),
            Direction::East => (y + 1..y + h - 1).map(|cy| Coord::new(x + w - 1, cy)).collect(),
            Direction::West => (y + 1..y + h - 1).map(|cy| Coord::new(x, cy)).collect(),
        }
    }

    /// Room-relative `(column, row)` of a grid coordinate inside the room
    pub const fn local(&self, coord: Coord) -> Option<(i32, i32)> {
        if self.contains(coord) {
            Some((coord.x - self.origin.x, coord.y - self.origin.y))
        } else {
            None
        }
    }

    /// Grid coordinate of a room-relative `(column, row)`
    pub const fn global(&self, column: i32, row: i32) -> Option<Coord> {
        if column >= 0 && row >= 0 && column < self.width && row < self.height {
            Some(Coord::new(self.origin.x + column, self.origin.y + row))
        } else {
            None
        }
    }
}

fn ranges_intersect(a: &Range<i32>, b: &Range<i32>) -> bool {
    a.start < b.end && b.start < a.end
}
