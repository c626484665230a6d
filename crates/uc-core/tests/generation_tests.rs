use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;
use uc_core::dungeon::connectivity::{all_rooms_connected, reachable_from};
use uc_core::{
    Coord, Dungeon, DungeonGenerator, GameRng, GenerationConfig, GenerationError,
    PlacementStrategy, RoomId, TileType, generate,
};

fn count(dungeon: &Dungeon, pred: impl Fn(TileType) -> bool) -> usize {
    dungeon
        .tile_histogram()
        .iter()
        .filter(|(typ, _)| pred(**typ))
        .map(|(_, n)| *n)
        .sum()
}

#[test]
fn test_single_room_on_20x20() {
    for strategy in [PlacementStrategy::Compact, PlacementStrategy::Scatter] {
        let mut rng = GameRng::new(2024);
        let dungeon = generate(20, 20, 1, 4, 4, strategy, &mut rng).unwrap();

        assert_eq!(dungeon.grid_dimensions(), (20, 20));
        assert_eq!(dungeon.rooms().len(), 1);
        let room = dungeon.rooms()[0];
        assert_eq!((room.width(), room.height()), (4, 4));

        assert_eq!(count(&dungeon, |t| t.is_corner()), 4);
        assert_eq!(count(&dungeon, |t| t.is_wall()), 8);
        assert_eq!(count(&dungeon, |t| t == TileType::Floor), 4);
        assert_eq!(count(&dungeon, |t| t == TileType::Void), 400 - 16);
    }

    let mut rng = GameRng::new(5);
    let dungeon = generate(20, 20, 1, 4, 4, PlacementStrategy::Compact, &mut rng).unwrap();
    let room = dungeon.rooms()[0];
    assert_eq!(room.origin(), Coord::new(8, 8));
    assert_eq!(room.center(), Coord::new(10, 10));
    assert_eq!(dungeon.tile_at(Coord::new(8, 8)).unwrap(), TileType::SouthWestCorner);
    assert_eq!(dungeon.tile_at(Coord::new(11, 8)).unwrap(), TileType::SouthEastCorner);
    assert_eq!(dungeon.tile_at(Coord::new(8, 11)).unwrap(), TileType::NorthWestCorner);
    assert_eq!(dungeon.tile_at(Coord::new(11, 11)).unwrap(), TileType::NorthEastCorner);
}

#[test]
fn test_min_above_max_is_rejected() {
    for strategy in [PlacementStrategy::Compact, PlacementStrategy::Scatter] {
        let mut rng = GameRng::new(0);
        let err = generate(20, 20, 4, 8, 5, strategy, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidDimension {
                what: "max_room_size",
                value: 5,
                reason: "must not be smaller than min_room_size",
            }
        );
    }
}

#[test]
fn test_non_positive_grid_is_rejected() {
    let mut rng = GameRng::new(0);
    assert!(matches!(
        generate(0, 20, 4, 4, 6, PlacementStrategy::Scatter, &mut rng),
        Err(GenerationError::InvalidDimension { what: "width", .. })
    ));
    assert!(matches!(
        generate(20, -3, 4, 4, 6, PlacementStrategy::Scatter, &mut rng),
        Err(GenerationError::InvalidDimension { what: "height", .. })
    ));
    assert!(matches!(
        generate(20, 20, 4, 0, 6, PlacementStrategy::Scatter, &mut rng),
        Err(GenerationError::InvalidDimension { what: "min_room_size", .. })
    ));
}

#[test]
fn test_compact_needs_door_sized_rooms() {
    let mut rng = GameRng::new(0);
    assert!(matches!(
        generate(40, 40, 4, 2, 6, PlacementStrategy::Compact, &mut rng),
        Err(GenerationError::InvalidDimension { what: "min_room_size", .. })
    ));
    // corridors do not need walls to line up
    assert!(generate(40, 40, 4, 2, 6, PlacementStrategy::Scatter, &mut rng).is_ok());
}

#[test]
fn test_compact_doors_round_trip() {
    let mut rng = GameRng::new(99);
    let dungeon = generate(80, 80, 10, 4, 10, PlacementStrategy::Compact, &mut rng).unwrap();
    assert!(dungeon.rooms().len() > 1);

    for index in 1..dungeon.rooms().len() {
        let id = RoomId(index);
        let linked: Vec<_> = dungeon
            .doors_of(id)
            .into_iter()
            .filter_map(|door| dungeon.traverse_door(door).map(|link| (door, link)))
            .collect();
        assert!(!linked.is_empty(), "room {id} has no linked door");

        for (door, link) in linked {
            assert_ne!(link.room, id);
            assert_eq!(dungeon.room_at(link.partner), Some(link.room));
            let back = dungeon.traverse_door(link.partner).unwrap();
            assert_eq!(back.partner, door);
            assert_eq!(back.room, id);
            assert_eq!(dungeon.tile_at(link.arrival).unwrap(), TileType::Floor);
            assert_eq!(dungeon.room_at(link.arrival), Some(link.room));
        }
    }
    assert!(all_rooms_connected(&dungeon));
}

#[test]
fn test_scatter_successive_rooms_are_reachable() {
    for seed in 0..10 {
        let mut rng = GameRng::new(seed);
        let dungeon = generate(64, 48, 9, 3, 9, PlacementStrategy::Scatter, &mut rng).unwrap();
        for pair in dungeon.rooms().windows(2) {
            let reached = reachable_from(&dungeon, pair[0].center());
            assert!(
                reached.contains(&pair[1].center()),
                "seed {seed}: {} cannot reach {}",
                pair[0].center(),
                pair[1].center()
            );
        }
        assert!(all_rooms_connected(&dungeon));
    }
}

#[test]
fn test_clear_and_regenerate_is_reproducible() {
    let config = GenerationConfig::new(50, 40, 7, 4, 8, PlacementStrategy::Scatter).with_seed(31);
    let generator = DungeonGenerator::new(config).unwrap();

    let mut dungeon = generator.generate(&mut generator.rng()).unwrap();
    let rooms = dungeon.rooms().len();
    let histogram = dungeon.tile_histogram();

    dungeon.clear();
    assert!(dungeon.rooms().is_empty());
    assert_eq!(count(&dungeon, |t| t != TileType::Void), 0);

    let summary = generator.populate(&mut dungeon, &mut generator.rng()).unwrap();
    assert_eq!(summary.placed, rooms);
    assert_eq!(dungeon.rooms().len(), rooms);
    assert_eq!(dungeon.tile_histogram(), histogram);
}

#[test]
fn test_observer_replays_to_final_grid() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let generator =
        DungeonGenerator::new(GenerationConfig::new(40, 40, 5, 3, 7, PlacementStrategy::Compact))
            .unwrap();
    let mut dungeon = Dungeon::new(40, 40).unwrap();
    dungeon.set_observer(Box::new(move |coord: Coord, old: TileType, new: TileType| {
        sink.borrow_mut().push((coord, old, new));
    }));
    generator.populate(&mut dungeon, &mut GameRng::new(8)).unwrap();

    // replay in order onto an empty floor
    let mut replay: HashMap<Coord, TileType> = HashMap::new();
    for &(coord, old, new) in events.borrow().iter() {
        let current = replay.get(&coord).copied().unwrap_or(TileType::Void);
        assert_eq!(current, old, "out of order event at {coord}");
        assert_ne!(old, new);
        replay.insert(coord, new);
    }
    for tile in dungeon.grid().iter() {
        let replayed = replay.get(&tile.coord).copied().unwrap_or(TileType::Void);
        assert_eq!(replayed, tile.typ);
    }

    // the first room is written before anything else happens
    let first = dungeon.rooms()[0];
    let opening: Vec<Coord> = events.borrow().iter().take(first.area() as usize).map(|e| e.0).collect();
    assert_eq!(opening, first.tiles().collect::<Vec<_>>());

    // regenerating starts by voiding every occupied tile
    let occupied = count(&dungeon, |t| t != TileType::Void);
    events.borrow_mut().clear();
    generator.populate(&mut dungeon, &mut GameRng::new(9)).unwrap();
    let log = events.borrow();
    assert!(log[..occupied].iter().all(|&(_, old, new)| old != TileType::Void && new == TileType::Void));
    assert!(log[occupied..].iter().all(|&(_, _, new)| new != TileType::Void));
}

#[test]
fn test_solid_tiles_are_room_boundaries() {
    let mut rng = GameRng::new(17);
    let dungeon = generate(60, 60, 8, 4, 9, PlacementStrategy::Scatter, &mut rng).unwrap();
    for tile in dungeon.grid().iter() {
        if tile.typ.is_solid() {
            let owner = tile.room.and_then(|id| dungeon.room(id)).unwrap();
            assert!(owner.classify(tile.coord).is_boundary());
        }
        if tile.typ == TileType::Corridor {
            assert!(tile.room.is_none());
        }
    }
    assert_eq!(dungeon.grid().world_position(Coord::new(30, 30)), (0.0, 0.0));
}

#[test]
fn test_config_from_partial_json() {
    let config: GenerationConfig =
        serde_json::from_str(r#"{ "strategy": "scatter", "room_count": 3, "seed": 12 }"#).unwrap();
    assert_eq!(config.strategy, PlacementStrategy::Scatter);
    assert_eq!(config.room_count, 3);
    assert_eq!(config.seed, Some(12));
    assert_eq!(config.width, uc_core::DEFAULT_GRID_SIZE);
    assert_eq!(config.attempts_per_room, uc_core::DEFAULT_ATTEMPTS_PER_ROOM);

    let generator = DungeonGenerator::new(config).unwrap();
    let dungeon = generator.generate(&mut generator.rng()).unwrap();
    assert!(dungeon.rooms().len() <= 3);
}
