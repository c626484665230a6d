//! The generated floor: tile grid plus the rooms placed on it

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{Coord, DoorLink, Room, RoomId, Tile, TileGrid, TileObserver, TileType};
use crate::error::Result;

/// One dungeon floor
///
/// Rooms are kept in placement order; a room's `RoomId` is its index.
#[derive(Debug, Serialize, Deserialize)]
pub struct Dungeon {
    grid: TileGrid,
    rooms: Vec<Room>,
}

impl Dungeon {
    /// Create an empty floor of void tiles
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self {
            grid: TileGrid::new(width, height)?,
            rooms: Vec::new(),
        })
    }

    /// Install the tile change observer, returning the previous one
    pub fn set_observer(&mut self, observer: Box<dyn TileObserver>) -> Option<Box<dyn TileObserver>> {
        self.grid.set_observer(observer)
    }

    pub fn take_observer(&mut self) -> Option<Box<dyn TileObserver>> {
        self.grid.take_observer()
    }

    /// Reset every tile to void and forget all rooms
    pub fn clear(&mut self) {
        self.grid.clear();
        self.rooms.clear();
    }

    pub fn tile_at(&self, coord: Coord) -> Result<TileType> {
        self.grid.type_at(coord)
    }

    pub fn tile(&self, coord: Coord) -> Result<&Tile> {
        self.grid.get(coord)
    }

    /// Accepted rooms in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    pub fn grid_dimensions(&self) -> (i32, i32) {
        self.grid.dimensions()
    }

    /// Count of tiles per type. Types with no tiles are absent.
    pub fn tile_histogram(&self) -> HashMap<TileType, usize> {
        let mut counts = HashMap::new();
        for tile in self.grid.iter() {
            *counts.entry(tile.typ).or_insert(0) += 1;
        }
        counts
    }

    /// Room owning the tile at `coord`
    pub fn room_at(&self, coord: Coord) -> Option<RoomId> {
        self.grid.get(coord).ok().and_then(|tile| tile.room)
    }

    /// Door tiles on a room's boundary
    pub fn doors_of(&self, id: RoomId) -> Vec<Coord> {
        let Some(room) = self.room(id) else {
            return Vec::new();
        };
        room.tiles()
            .filter(|&c| self.grid.get(c).is_ok_and(Tile::is_door))
            .collect()
    }

    /// Where stepping onto the door at `coord` leads, if it is a linked door
    pub fn traverse_door(&self, coord: Coord) -> Option<DoorLink> {
        let tile = self.grid.get(coord).ok()?;
        if tile.is_door() { tile.link } else { None }
    }

    /// Write a validated room into the grid and append it
    pub(crate) fn add_room(&mut self, room: Room) -> Result<RoomId> {
        let id = RoomId(self.rooms.len());
        room.init(id, &mut self.grid)?;
        self.rooms.push(room);
        Ok(id)
    }
}
