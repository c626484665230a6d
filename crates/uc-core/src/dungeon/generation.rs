//! Floor generation
//!
//! Builds a floor slot by slot: ask the placer for a room, write the room
//! into the grid, then connect it to the room it was placed against. Slots
//! the placer cannot fill are skipped; nothing already placed is undone.

use tracing::{debug, info};

use super::corridor::{LegOrder, carve_corridor};
use super::doors::place_door_pair;
use super::placement::{Constraints, Link, Placement, RoomPlacer, placer_for};
use super::{Dungeon, RoomId};
use crate::config::{GenerationConfig, PlacementStrategy};
use crate::error::{GenerationError, Result};
use crate::rng::GameRng;

/// Outcome of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    /// Room slots asked for
    pub requested: usize,
    /// Rooms actually placed
    pub placed: usize,
    /// One `PlacementExhausted` per skipped slot
    pub skipped: Vec<GenerationError>,
}

impl GenerationSummary {
    /// Check whether every requested slot got a room
    pub fn is_complete(&self) -> bool {
        self.placed == self.requested
    }
}

/// Builds floors from a validated configuration
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    config: GenerationConfig,
}

impl DungeonGenerator {
    /// Validate `config` and wrap it
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Random source for this configuration: seeded when a seed is set
    pub fn rng(&self) -> GameRng {
        match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Allocate a fresh floor and fill it
    pub fn generate(&self, rng: &mut GameRng) -> Result<Dungeon> {
        let mut dungeon = Dungeon::new(self.config.width, self.config.height)?;
        self.populate(&mut dungeon, rng)?;
        Ok(dungeon)
    }

    /// Clear `dungeon` and fill it again.
    ///
    /// The dungeon's grid must have the configured dimensions.
    pub fn populate(&self, dungeon: &mut Dungeon, rng: &mut GameRng) -> Result<GenerationSummary> {
        let (width, height) = dungeon.grid_dimensions();
        if width != self.config.width {
            return Err(GenerationError::invalid(
                "width",
                width,
                "dungeon grid does not match the configured width",
            ));
        }
        if height != self.config.height {
            return Err(GenerationError::invalid(
                "height",
                height,
                "dungeon grid does not match the configured height",
            ));
        }

        dungeon.clear();

        let constraints = Constraints::from_config(&self.config);
        let mut placer = placer_for(&self.config);
        let mut summary = GenerationSummary {
            requested: self.config.room_count,
            ..GenerationSummary::default()
        };

        for slot in 0..self.config.room_count {
            match next_placement(placer.as_mut(), dungeon, &constraints, rng) {
                Some(placement) => {
                    let id = commit(dungeon, placement, rng)?;
                    debug!(
                        slot,
                        room = %id,
                        x = placement.room.origin().x,
                        y = placement.room.origin().y,
                        w = placement.room.width(),
                        h = placement.room.height(),
                        "room placed"
                    );
                    summary.placed += 1;
                }
                None => {
                    let attempts = placer.attempts_per_slot();
                    debug!(slot, attempts, "slot skipped");
                    summary
                        .skipped
                        .push(GenerationError::PlacementExhausted { slot, attempts });
                }
            }
        }

        info!(
            strategy = %self.config.strategy,
            requested = summary.requested,
            placed = summary.placed,
            skipped = summary.skipped.len(),
            "floor generated"
        );
        Ok(summary)
    }
}

fn next_placement(
    placer: &mut dyn RoomPlacer,
    dungeon: &Dungeon,
    constraints: &Constraints,
    rng: &mut GameRng,
) -> Option<Placement> {
    (0..placer.attempts_per_slot()).find_map(|_| placer.try_place(dungeon.rooms(), constraints, rng))
}

/// Write a placement into the dungeon and connect it
fn commit(dungeon: &mut Dungeon, placement: Placement, rng: &mut GameRng) -> Result<RoomId> {
    let room = placement.room;
    let id = dungeon.add_room(room)?;

    match placement.link {
        Link::None => {}
        Link::Corridor { to } => {
            if let Some(target) = dungeon.room(to).copied() {
                let order = LegOrder::random(rng);
                let carved = carve_corridor(dungeon.grid_mut(), target.center(), room.center(), order)?;
                debug!(from = %to, to = %id, carved, ?order, "corridor carved");
            }
        }
        Link::Doors { anchor, direction } => {
            if let Some(anchor_room) = dungeon.room(anchor).copied() {
                place_door_pair(dungeon.grid_mut(), anchor, &anchor_room, id, &room, direction)?;
            }
        }
    }
    Ok(id)
}

/// Generate a floor in one call.
///
/// Fails with `InvalidDimension` before allocating anything when the bounds
/// are unusable.
pub fn generate(
    width: i32,
    height: i32,
    room_count: usize,
    min_room_size: i32,
    max_room_size: i32,
    strategy: PlacementStrategy,
    rng: &mut GameRng,
) -> Result<Dungeon> {
    let config = GenerationConfig::new(width, height, room_count, min_room_size, max_room_size, strategy);
    DungeonGenerator::new(config)?.generate(rng)
}
