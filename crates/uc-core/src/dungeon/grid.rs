//! Tile grid storage
//!
//! Dense, row-major storage of one `Tile` per coordinate in
//! `[0, width) x [0, height)`. The grid is the only place tile types change,
//! so it is also where change notifications are raised.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Coord, DoorLink, RoomId, Tile, TileType};
use crate::error::{GenerationError, Result};

/// Receives every tile type change, synchronously and in mutation order.
pub trait TileObserver {
    fn on_tile_type_changed(&mut self, coord: Coord, old: TileType, new: TileType);
}

impl<F> TileObserver for F
where
    F: FnMut(Coord, TileType, TileType),
{
    fn on_tile_type_changed(&mut self, coord: Coord, old: TileType, new: TileType) {
        self(coord, old, new)
    }
}

/// The dungeon tile grid
#[derive(Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    #[serde(skip)]
    observer: Option<Box<dyn TileObserver>>,
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tiles", &self.tiles.len())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl TileGrid {
    /// Allocate a grid of void tiles
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(GenerationError::invalid("width", width, "must be positive"));
        }
        if height <= 0 {
            return Err(GenerationError::invalid("height", height, "must be positive"));
        }

        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::void(Coord::new(x, y)));
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
            observer: None,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Grid size as `(width, height)`
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Install the change observer, returning the previous one
    pub fn set_observer(
        &mut self,
        observer: Box<dyn TileObserver>,
    ) -> Option<Box<dyn TileObserver>> {
        self.observer.replace(observer)
    }

    /// Remove the change observer
    pub fn take_observer(&mut self) -> Option<Box<dyn TileObserver>> {
        self.observer.take()
    }

    /// Check whether a coordinate lies on the grid
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    /// Check whether a `width x height` rectangle at `origin` lies on the grid
    pub fn contains_rect(&self, origin: Coord, width: i32, height: i32) -> bool {
        origin.x >= 0
            && origin.y >= 0
            && width > 0
            && height > 0
            && origin.x + width <= self.width
            && origin.y + height <= self.height
    }

    fn index(&self, coord: Coord) -> Result<usize> {
        if !self.in_bounds(coord) {
            return Err(GenerationError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Get the tile at `coord`
    pub fn get(&self, coord: Coord) -> Result<&Tile> {
        let idx = self.index(coord)?;
        Ok(&self.tiles[idx])
    }

    /// Get the tile type at `coord`
    pub fn type_at(&self, coord: Coord) -> Result<TileType> {
        self.get(coord).map(|tile| tile.typ)
    }

    /// Overwrite the type of the tile at `coord`, returning the old type.
    ///
    /// The observer is notified only when the type actually changes.
    pub fn set_type(&mut self, coord: Coord, typ: TileType) -> Result<TileType> {
        let idx = self.index(coord)?;
        let old = self.tiles[idx].typ;
        if old != typ {
            self.tiles[idx].typ = typ;
            self.notify(coord, old, typ);
        }
        Ok(old)
    }

    /// Give a tile its room classification and owner
    pub(crate) fn claim(&mut self, coord: Coord, room: RoomId, typ: TileType) -> Result<()> {
        let idx = self.index(coord)?;
        debug_assert!(
            self.tiles[idx].room.is_none(),
            "tile {coord} claimed twice"
        );
        self.tiles[idx].room = Some(room);
        self.set_type(coord, typ)?;
        Ok(())
    }

    /// Promote a tile to a door, optionally linked to a partner
    pub(crate) fn make_door(&mut self, coord: Coord, link: Option<DoorLink>) -> Result<()> {
        let idx = self.index(coord)?;
        self.tiles[idx].link = link;
        self.set_type(coord, TileType::Door)?;
        Ok(())
    }

    /// Reset every tile to void, dropping room ownership and door links.
    ///
    /// Tiles that were not already void raise a change notification.
    pub fn clear(&mut self) {
        for idx in 0..self.tiles.len() {
            let tile = &mut self.tiles[idx];
            let coord = tile.coord;
            let old = tile.typ;
            tile.typ = TileType::Void;
            tile.room = None;
            tile.link = None;
            if old != TileType::Void {
                self.notify(coord, old, TileType::Void);
            }
        }
    }

    /// World-space position of a tile with the grid centred on the origin
    pub fn world_position(&self, coord: Coord) -> (f32, f32) {
        (
            coord.x as f32 - self.width as f32 * 0.5,
            coord.y as f32 - self.height as f32 * 0.5,
        )
    }

    /// Iterate over every tile, row by row from y = 0
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    fn notify(&mut self, coord: Coord, old: TileType, new: TileType) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_tile_type_changed(coord, old, new);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_grid_is_void() {
        let grid = TileGrid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.iter().count(), 12);
        assert!(grid.iter().all(|t| t.typ == TileType::Void));
        assert_eq!(grid.get(Coord::new(3, 2)).unwrap().coord, Coord::new(3, 2));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            TileGrid::new(0, 5),
            Err(GenerationError::InvalidDimension { what: "width", .. })
        ));
        assert!(matches!(
            TileGrid::new(5, -1),
            Err(GenerationError::InvalidDimension { what: "height", .. })
        ));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = TileGrid::new(5, 5).unwrap();
        for coord in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(5, 0),
            Coord::new(0, 5),
        ] {
            assert_eq!(
                grid.get(coord).unwrap_err(),
                GenerationError::OutOfBounds {
                    coord,
                    width: 5,
                    height: 5
                }
            );
        }
    }

    #[test]
    fn test_set_type_returns_old() {
        let mut grid = TileGrid::new(3, 3).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(grid.set_type(c, TileType::Floor).unwrap(), TileType::Void);
        assert_eq!(grid.set_type(c, TileType::Door).unwrap(), TileType::Floor);
        assert_eq!(grid.type_at(c).unwrap(), TileType::Door);
    }

    #[test]
    fn test_contains_rect() {
        let grid = TileGrid::new(10, 8).unwrap();
        assert!(grid.contains_rect(Coord::new(0, 0), 10, 8));
        assert!(grid.contains_rect(Coord::new(6, 4), 4, 4));
        assert!(!grid.contains_rect(Coord::new(7, 4), 4, 4));
        assert!(!grid.contains_rect(Coord::new(-1, 0), 2, 2));
        assert!(!grid.contains_rect(Coord::new(0, 5), 2, 4));
    }

    #[test]
    fn test_observer_sees_changes_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut grid = TileGrid::new(3, 3).unwrap();
        grid.set_observer(Box::new(move |c: Coord, old: TileType, new: TileType| {
            sink.borrow_mut().push((c, old, new));
        }));

        grid.set_type(Coord::new(0, 0), TileType::Corridor).unwrap();
        grid.set_type(Coord::new(0, 0), TileType::Corridor).unwrap();
        grid.set_type(Coord::new(2, 1), TileType::Floor).unwrap();
        grid.clear();

        assert_eq!(
            *log.borrow(),
            vec![
                (Coord::new(0, 0), TileType::Void, TileType::Corridor),
                (Coord::new(2, 1), TileType::Void, TileType::Floor),
                (Coord::new(0, 0), TileType::Corridor, TileType::Void),
                (Coord::new(2, 1), TileType::Floor, TileType::Void),
            ]
        );
    }

    #[test]
    fn test_clear_drops_ownership_and_links() {
        let mut grid = TileGrid::new(3, 3).unwrap();
        grid.claim(Coord::new(1, 1), RoomId(0), TileType::Floor).unwrap();
        grid.make_door(
            Coord::new(1, 2),
            Some(DoorLink {
                room: RoomId(1),
                partner: Coord::new(1, 3),
                arrival: Coord::new(1, 4),
            }),
        )
        .unwrap();
        grid.clear();
        assert!(grid.iter().all(|t| *t == Tile::void(t.coord)));
    }

    #[test]
    fn test_world_position_is_centered() {
        let grid = TileGrid::new(4, 6).unwrap();
        assert_eq!(grid.world_position(Coord::new(0, 0)), (-2.0, -3.0));
        assert_eq!(grid.world_position(Coord::new(2, 3)), (0.0, 0.0));
    }
}
