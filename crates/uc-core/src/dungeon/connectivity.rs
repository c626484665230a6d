//! Reachability over walkable tiles
//!
//! Walking moves between orthogonal neighbours that are both passable, and a
//! linked door also leads to its partner.

use std::collections::VecDeque;

use hashbrown::HashSet;

use super::{Coord, Dungeon};

/// Every tile reachable on foot from `start`, `start` included.
///
/// Empty when `start` is off the grid or not passable.
pub fn reachable_from(dungeon: &Dungeon, start: Coord) -> HashSet<Coord> {
    let mut visited = HashSet::new();
    let grid = dungeon.grid();
    if !grid.type_at(start).is_ok_and(|t| t.is_passable()) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        let Ok(tile) = grid.get(coord) else {
            continue;
        };
        let linked = tile.link.map(|link| link.partner);

        for next in coord.neighbors().into_iter().chain(linked) {
            if visited.contains(&next) {
                continue;
            }
            if grid.type_at(next).is_ok_and(|t| t.is_passable()) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }
    visited
}

/// Check that every room can be walked to from the first one.
///
/// A room counts as reached when any of its tiles is reached.
pub fn all_rooms_connected(dungeon: &Dungeon) -> bool {
    let rooms = dungeon.rooms();
    let Some(first) = rooms.first() else {
        return true;
    };
    if rooms.len() == 1 {
        return true;
    }

    let grid = dungeon.grid();
    let Some(start) = first
        .tiles()
        .find(|&c| grid.type_at(c).is_ok_and(|t| t.is_passable()))
    else {
        return false;
    };

    let reached = reachable_from(dungeon, start);
    rooms
        .iter()
        .all(|room| room.tiles().any(|c| reached.contains(&c)))
}
