//! Room placement strategies
//!
//! A placer proposes where the next room goes, given the rooms accepted so
//! far. It never touches the grid: every proposal is already checked against
//! the grid bounds and every accepted room, so committing it cannot fail.

use tracing::trace;

use super::{Coord, Direction, Room, RoomId};
use crate::config::{GenerationConfig, PlacementStrategy};
use crate::rng::GameRng;

/// Limits a proposed room must respect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub width: i32,
    pub height: i32,
    pub min_room_size: i32,
    pub max_room_size: i32,
}

impl Constraints {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            min_room_size: config.min_room_size,
            max_room_size: config.max_room_size,
        }
    }

    /// Check whether a room lies entirely on the grid
    pub fn fits(&self, room: &Room) -> bool {
        let o = room.origin();
        o.x >= 0
            && o.y >= 0
            && room.width() > 0
            && room.height() > 0
            && o.x + room.width() <= self.width
            && o.y + room.height() <= self.height
    }

    /// Draw a `(width, height)` room size
    pub fn random_size(&self, rng: &mut GameRng) -> (i32, i32) {
        let w = rng.range_inclusive(self.min_room_size, self.max_room_size);
        let h = rng.range_inclusive(self.min_room_size, self.max_room_size);
        (w, h)
    }
}

/// How a placed room joins the dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Nothing to connect to (first room)
    None,
    /// Carve a corridor to this room's center
    Corridor { to: RoomId },
    /// Pair doors with the anchor room on its `direction` side
    Doors { anchor: RoomId, direction: Direction },
}

/// A validated room proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub room: Room,
    pub link: Link,
}

/// Source of room proposals
pub trait RoomPlacer {
    /// How many times `try_place` is called before a slot is given up
    fn attempts_per_slot(&self) -> usize;

    /// Propose one room that fits the grid and overlaps no accepted room
    fn try_place(
        &mut self,
        rooms: &[Room],
        constraints: &Constraints,
        rng: &mut GameRng,
    ) -> Option<Placement>;
}

/// Build the placer for a strategy
pub fn placer_for(config: &GenerationConfig) -> Box<dyn RoomPlacer> {
    match config.strategy {
        PlacementStrategy::Scatter => Box::new(ScatterPlacer::new(config.attempts_per_room)),
        PlacementStrategy::Compact => Box::new(CompactPlacer),
    }
}

fn overlaps_any(room: &Room, rooms: &[Room]) -> bool {
    rooms.iter().any(|other| room.overlaps(other))
}

/// Rooms at independent random positions, joined by corridors to the room
/// placed before them.
#[derive(Debug, Clone, Copy)]
pub struct ScatterPlacer {
    attempts: usize,
}

impl ScatterPlacer {
    pub fn new(attempts: usize) -> Self {
        Self { attempts }
    }
}

impl RoomPlacer for ScatterPlacer {
    fn attempts_per_slot(&self) -> usize {
        self.attempts
    }

    fn try_place(
        &mut self,
        rooms: &[Room],
        constraints: &Constraints,
        rng: &mut GameRng,
    ) -> Option<Placement> {
        let (w, h) = constraints.random_size(rng);
        if w > constraints.width || h > constraints.height {
            trace!(w, h, "room larger than grid");
            return None;
        }
        let x = rng.range_inclusive(0, constraints.width - w);
        let y = rng.range_inclusive(0, constraints.height - h);
        let room = Room::new(Coord::new(x, y), w, h);

        if overlaps_any(&room, rooms) {
            trace!(x, y, w, h, "candidate overlaps");
            return None;
        }

        let link = match rooms.len() {
            0 => Link::None,
            n => Link::Corridor { to: RoomId(n - 1) },
        };
        Some(Placement { room, link })
    }
}

/// Rooms packed flush against a random accepted room and joined to it by a
/// pair of doors. The first room is centered on the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactPlacer;

impl RoomPlacer for CompactPlacer {
    fn attempts_per_slot(&self) -> usize {
        1
    }

    fn try_place(
        &mut self,
        rooms: &[Room],
        constraints: &Constraints,
        rng: &mut GameRng,
    ) -> Option<Placement> {
        let (w, h) = constraints.random_size(rng);

        if rooms.is_empty() {
            let origin = Coord::new(constraints.width / 2 - w / 2, constraints.height / 2 - h / 2);
            let room = Room::new(origin, w, h);
            return constraints.fits(&room).then_some(Placement {
                room,
                link: Link::None,
            });
        }

        let mut anchors: Vec<usize> = (0..rooms.len()).collect();
        rng.shuffle(&mut anchors);

        for anchor in anchors {
            let mut directions = Direction::ALL;
            rng.shuffle(&mut directions);

            for direction in directions {
                let origin = rooms[anchor].adjacent_origin(w, h, direction);
                let room = Room::new(origin, w, h);
                if !constraints.fits(&room) {
                    trace!(anchor, %direction, "candidate off grid");
                    continue;
                }
                if overlaps_any(&room, rooms) {
                    trace!(anchor, %direction, "candidate overlaps");
                    continue;
                }
                return Some(Placement {
                    room,
                    link: Link::Doors {
                        anchor: RoomId(anchor),
                        direction,
                    },
                });
            }
        }
        None
    }
}
