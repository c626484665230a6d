//! Corridor carving between scattered rooms
//!
//! Two rooms are joined by an L-shaped, one tile wide path between their
//! centres: one straight leg along a row and one along a column. Empty space
//! becomes corridor; room boundary tiles the path crosses become plain
//! doorways; floor is left alone.

use tracing::trace;

use super::{Coord, TileGrid, TileType};
use crate::error::Result;
use crate::rng::GameRng;

/// Which leg of the L is dug first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegOrder {
    /// Along the starting row, then along the destination column
    HorizontalFirst,
    /// Along the starting column, then along the destination row
    VerticalFirst,
}

impl LegOrder {
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.one_in(2) {
            LegOrder::HorizontalFirst
        } else {
            LegOrder::VerticalFirst
        }
    }

    /// Tile where the two legs meet
    pub const fn elbow(self, from: Coord, to: Coord) -> Coord {
        match self {
            LegOrder::HorizontalFirst => Coord::new(to.x, from.y),
            LegOrder::VerticalFirst => Coord::new(from.x, to.y),
        }
    }
}

/// Every tile on the L path from `from` to `to`, both ends included, in
/// walking order.
pub fn corridor_path(from: Coord, to: Coord, order: LegOrder) -> Vec<Coord> {
    let elbow = order.elbow(from, to);
    let mut path = straight_run(from, elbow);
    path.extend(straight_run(elbow, to).into_iter().skip(1));
    path
}

fn straight_run(from: Coord, to: Coord) -> Vec<Coord> {
    debug_assert!(from.x == to.x || from.y == to.y);
    let dx = (to.x - from.x).signum();
    let dy = (to.y - from.y).signum();
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs());
    (0..=steps)
        .map(|i| Coord::new(from.x + dx * i, from.y + dy * i))
        .collect()
}

/// Carve the L path from `from` to `to`. Returns the number of tiles changed.
pub fn carve_corridor(grid: &mut TileGrid, from: Coord, to: Coord, order: LegOrder) -> Result<usize> {
    let mut changed = 0;
    for coord in corridor_path(from, to, order) {
        let typ = grid.type_at(coord)?;
        if typ == TileType::Void {
            grid.set_type(coord, TileType::Corridor)?;
            changed += 1;
        } else if typ.is_boundary() {
            trace!(x = coord.x, y = coord.y, "corridor breaches wall");
            grid.make_door(coord, None)?;
            changed += 1;
        }
    }
    Ok(changed)
}
