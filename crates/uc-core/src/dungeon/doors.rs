//! Paired doors between flush rooms
//!
//! When a room is placed flush against an anchor room, one wall tile on each
//! side of the shared edge becomes a door. Each door records the room on the
//! other side, its partner door and the tile to arrive on after passing
//! through.

use tracing::debug;

use super::{Coord, Direction, DoorLink, Room, RoomId, TileGrid};
use crate::error::{GenerationError, Result};

/// Find the door pair for a room flush against `anchor` on its `direction`
/// side without touching the grid.
///
/// Candidates on the anchor wall are tried from the middle outwards; the
/// first whose neighbour across the edge is a wall tile of `room` wins.
pub fn find_door_pair(anchor: &Room, room: &Room, direction: Direction) -> Option<(Coord, Coord)> {
    let mut candidates = anchor.wall_tiles(direction);
    let targets = room.wall_tiles(direction.opposite());

    while !candidates.is_empty() {
        let door = candidates.remove((candidates.len() - 1) / 2);
        let partner = door.step(direction);
        if targets.contains(&partner) {
            return Some((door, partner));
        }
    }
    None
}

/// Turn a matching pair of wall tiles into linked doors.
///
/// Returns `(anchor_door, room_door)`.
pub fn place_door_pair(
    grid: &mut TileGrid,
    anchor_id: RoomId,
    anchor: &Room,
    room_id: RoomId,
    room: &Room,
    direction: Direction,
) -> Result<(Coord, Coord)> {
    let (door, partner) =
        find_door_pair(anchor, room, direction).ok_or(GenerationError::NoDoorAlignment {
            anchor: anchor_id,
            room: room_id,
        })?;

    grid.make_door(
        door,
        Some(DoorLink {
            room: room_id,
            partner,
            arrival: partner.step(direction),
        }),
    )?;
    grid.make_door(
        partner,
        Some(DoorLink {
            room: anchor_id,
            partner: door,
            arrival: door.step(direction.opposite()),
        }),
    )?;

    debug!(%anchor_id, %room_id, %door, %partner, %direction, "doors placed");
    Ok((door, partner))
}
