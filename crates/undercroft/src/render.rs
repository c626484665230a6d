//! ASCII rendering of a generated floor

use std::fmt::Write;

use strum::IntoEnumIterator;
use uc_core::{Coord, Dungeon, TileType};

/// Draw the floor with north at the top, one character per tile
pub fn render(dungeon: &Dungeon) -> String {
    let (width, height) = dungeon.grid_dimensions();
    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for y in (0..height).rev() {
        for x in 0..width {
            let typ = dungeon.tile_at(Coord::new(x, y)).unwrap_or(TileType::Void);
            out.push(typ.symbol());
        }
        out.push('\n');
    }
    out
}

/// Tile counts, one line per type present, in declaration order
pub fn stats(dungeon: &Dungeon) -> String {
    let histogram = dungeon.tile_histogram();
    let mut out = String::new();
    let _ = writeln!(out, "rooms: {}", dungeon.rooms().len());
    for typ in TileType::iter() {
        if let Some(n) = histogram.get(&typ) {
            let name = typ.to_string();
            let _ = writeln!(out, "{name:>16} '{}' {n}", typ.symbol());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uc_core::{GameRng, PlacementStrategy, generate};

    #[test]
    fn test_render_single_room() {
        let mut rng = GameRng::new(0);
        let dungeon = generate(6, 5, 1, 4, 4, PlacementStrategy::Compact, &mut rng).unwrap();
        // room origin is (1, 0)
        assert_eq!(
            render(&dungeon),
            "      \n +--+ \n |..| \n |..| \n +--+ \n"
        );
    }

    #[test]
    fn test_stats_lists_present_types() {
        let mut rng = GameRng::new(0);
        let dungeon = generate(6, 5, 1, 4, 4, PlacementStrategy::Compact, &mut rng).unwrap();
        let text = stats(&dungeon);
        assert!(text.starts_with("rooms: 1\n"));
        assert!(text.contains("Floor '.' 4"));
        assert!(!text.contains("Corridor"));
    }
}
