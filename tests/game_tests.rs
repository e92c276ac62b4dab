mod common;

use broadside::{
    AttackOutcome, BitBoardError, CellState, GameConfig, GameController, GameError, GameEvent,
    Orientation, Phase, ShipClass, Side, StandardGame, Turn, Winner, FLEET,
};
use common::{battle_game, opponent_water, place_layout, LAYOUT};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn opponent_ship_cells(game: &StandardGame) -> Vec<usize> {
    game.board(Side::Opponent)
        .fleet()
        .ships()
        .iter()
        .flat_map(|s| s.cells().iter().copied())
        .collect()
}

#[test]
fn placement_cursor_walks_the_fleet() {
    let mut game = StandardGame::from_seed(1).unwrap();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.turn(), None);
    assert_eq!(game.next_ship(), Some(FLEET[0]));

    for (i, start) in LAYOUT.iter().take(5).enumerate() {
        game.place_next(*start).unwrap();
        assert_eq!(game.placed_count(), i + 1);
    }
    assert_eq!(game.next_ship().map(|c| c.name()), Some("Destroyer"));
    assert_eq!(game.begin_battle(), Err(GameError::NotAllShipsPlaced));

    let err = game.place_next(81).unwrap_err();
    assert_eq!(err, GameError::PlacementRejected(broadside::Rejection::Overlaps));
    assert_eq!(game.placed_count(), 5);
    let events = game.drain_events();
    assert!(matches!(
        events.last(),
        Some(GameEvent::PlacementRejected { ship: "Destroyer", start: 81, .. })
    ));
}

#[test]
fn placement_is_closed_once_fleet_is_complete() {
    let mut game = StandardGame::from_seed(2).unwrap();
    place_layout(&mut game);
    assert_eq!(game.next_ship(), None);
    assert_eq!(game.place_next(99), Err(GameError::WrongPhase));
    assert_eq!(game.place_random(), Err(GameError::WrongPhase));
    game.begin_battle().unwrap();
    assert_eq!(game.begin_battle(), Err(GameError::WrongPhase));
}

#[test]
fn random_placement_completes_the_fleet() {
    let mut game = StandardGame::from_seed(3).unwrap();
    while game.next_ship().is_some() {
        match game.place_random() {
            Ok(cells) => assert!(!cells.is_empty()),
            // earlier ships left no room; start the layout over
            Err(GameError::PlacementExhausted { .. }) => game.restart(),
            Err(e) => panic!("unexpected error {}", e),
        }
    }
    assert_eq!(game.placed_count(), FLEET.len());
    game.begin_battle().unwrap();
    assert_eq!(game.turn(), Some(Turn::PlayerTurn));
    assert_eq!(game.board(Side::Opponent).fleet().len(), FLEET.len());
}

#[test]
fn preview_and_orientation() {
    let mut game = StandardGame::from_seed(4).unwrap();
    assert_eq!(game.preview_placement(0), Some(vec![0]));
    game.place_next(0).unwrap();
    assert_eq!(game.preview_placement(1), None);
    assert_eq!(game.preview_placement(2), Some(vec![2]));

    assert_eq!(game.toggle_orientation(), Orientation::Vertical);
    assert!(game
        .drain_events()
        .contains(&GameEvent::OrientationChanged(Orientation::Vertical)));
    // preview has no side effects
    assert_eq!(game.placed_count(), 1);
}

#[test]
fn attacks_outside_the_player_turn_are_refused() {
    let mut game = StandardGame::from_seed(5).unwrap();
    assert_eq!(game.attack_cell(0), Err(GameError::OutOfTurn));

    let mut game = battle_game(5);
    let water = opponent_water(&game);
    assert_eq!(game.attack_cell(water), Ok(AttackOutcome::Miss));
    assert_eq!(game.turn(), Some(Turn::BotTurn));
    assert_eq!(game.attack_cell(water + 1), Err(GameError::OutOfTurn));
    assert_eq!(game.attack_cell(1000).unwrap_err(), GameError::OutOfTurn);
}

#[test]
fn miss_hands_the_turn_to_the_bot() {
    let mut game = battle_game(6);
    assert_eq!(game.bot_turn(), Err(GameError::OutOfTurn));

    game.attack_cell(opponent_water(&game)).unwrap();
    let events = game.drain_events();
    assert_eq!(events.last(), Some(&GameEvent::TurnChanged(Turn::BotTurn)));

    let shots = game.bot_turn().unwrap();
    assert!(!shots.is_empty());
    assert_eq!(game.turn(), Some(Turn::PlayerTurn));
    let resolved = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::CellResolved { side: Side::Player, .. }))
        .count();
    assert_eq!(resolved, shots.len());
}

#[test]
fn hit_keeps_the_turn() {
    let mut game = battle_game(7);
    let target = opponent_ship_cells(&game)[0];
    assert_eq!(game.attack_cell(target), Ok(AttackOutcome::Hit));
    assert_eq!(game.turn(), Some(Turn::PlayerTurn));
    assert_eq!(game.cell(Side::Opponent, target), Ok(CellState::Hit));
}

#[test]
fn resolved_cell_attack_changes_nothing() {
    let mut game = battle_game(8);
    let target = opponent_ship_cells(&game)[0];
    game.attack_cell(target).unwrap();
    game.drain_events();
    let before = game.cells(Side::Opponent);

    assert_eq!(game.attack_cell(target), Ok(AttackOutcome::AlreadyResolved));
    assert_eq!(game.cells(Side::Opponent), before);
    assert_eq!(game.turn(), Some(Turn::PlayerTurn));
    assert!(game.drain_events().is_empty());
}

#[test]
fn opponent_ships_stay_hidden() {
    let game = battle_game(9);
    let ship_cell = opponent_ship_cells(&game)[0];
    assert_eq!(
        game.board(Side::Opponent).cell(ship_cell),
        Ok(CellState::Occupied)
    );
    assert_eq!(game.cell(Side::Opponent, ship_cell), Ok(CellState::Empty));
    assert!(!game.cells(Side::Opponent).contains(&CellState::Occupied));
    assert_eq!(game.cell(Side::Player, LAYOUT[0]), Ok(CellState::Occupied));
}

#[test]
fn flags_mark_unresolved_cells_only() {
    let mut game = StandardGame::from_seed(10).unwrap();
    assert_eq!(game.toggle_flag(0), Err(GameError::WrongPhase));

    let mut game = battle_game(10);
    let ship_cell = opponent_ship_cells(&game)[0];
    assert_eq!(game.toggle_flag(ship_cell), Ok(CellState::Flagged));
    assert_eq!(game.cell(Side::Opponent, ship_cell), Ok(CellState::Flagged));
    assert_eq!(game.attack_cell(ship_cell), Ok(AttackOutcome::AlreadyResolved));
    assert_eq!(game.toggle_flag(ship_cell), Ok(CellState::Empty));
    assert!(game.drain_events().contains(&GameEvent::FlagToggled {
        index: ship_cell,
        flagged: false
    }));

    game.attack_cell(ship_cell).unwrap();
    assert_eq!(game.toggle_flag(ship_cell), Err(GameError::AlreadyResolved));
}

#[test]
fn sinking_every_ship_wins() {
    let mut game = battle_game(11);
    for index in opponent_ship_cells(&game) {
        assert_eq!(game.attack_cell(index), Ok(AttackOutcome::Hit));
    }
    assert_eq!(game.phase(), Phase::Terminal(Winner::Player));
    assert_eq!(game.turn(), None);
    assert!(game.fleet_status(Side::Opponent).iter().all(|s| s.destroyed));

    let events = game.drain_events();
    let sunk = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShipDestroyed { side: Side::Opponent, .. }))
        .count();
    assert_eq!(sunk, FLEET.len());
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            winner: Winner::Player,
            forfeit: false
        })
    );
    assert_eq!(game.attack_cell(0), Err(GameError::OutOfTurn));
}

#[test]
fn ship_destroyed_reported_once_per_ship() {
    let mut game = battle_game(12);
    let ship = game.board(Side::Opponent).fleet().ships()[FLEET.len() - 1].clone();
    for &index in ship.cells() {
        game.attack_cell(index).unwrap();
    }
    let destroyed: Vec<_> = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::ShipDestroyed { .. }))
        .collect();
    assert_eq!(
        destroyed,
        vec![GameEvent::ShipDestroyed {
            side: Side::Opponent,
            ship: FLEET.len() - 1,
            name: "Carrier"
        }]
    );
    let status = game.fleet_status(Side::Opponent);
    assert_eq!(status.iter().filter(|s| s.destroyed).count(), 1);
}

#[test]
fn forfeit_ends_the_battle() {
    let mut game = StandardGame::from_seed(13).unwrap();
    game.forfeit();
    assert_eq!(game.phase(), Phase::Placement);

    let mut game = battle_game(13);
    assert!(!game.forfeit_available());
    assert!(game.unlock_forfeit());
    assert!(!game.unlock_forfeit());
    game.forfeit();
    assert_eq!(game.phase(), Phase::Terminal(Winner::Bot));
    assert_eq!(
        game.drain_events().last(),
        Some(&GameEvent::GameOver {
            winner: Winner::Bot,
            forfeit: true
        })
    );
    assert_eq!(game.attack_cell(0), Err(GameError::OutOfTurn));
    assert_eq!(game.bot_turn(), Err(GameError::OutOfTurn));
}

#[test]
fn restart_returns_to_placement() {
    let mut game = battle_game(14);
    game.attack_cell(opponent_water(&game)).unwrap();
    game.restart();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.placed_count(), 0);
    assert_eq!(game.orientation(), Orientation::Horizontal);
    assert!(!game.forfeit_available());
    assert!(game.bot().memory().is_empty());
    assert!(game.board(Side::Opponent).fleet().is_empty());
    assert_eq!(game.drain_events(), vec![GameEvent::Restarted]);
}

static OVERSIZED: [ShipClass; 1] = [ShipClass::new("Leviathan", 11)];
static EMPTY: [ShipClass; 0] = [];

#[test]
fn invalid_configs_are_rejected() {
    let rng = || SmallRng::seed_from_u64(0);
    let config = GameConfig {
        fleet: &OVERSIZED,
        ..GameConfig::default()
    };
    assert!(matches!(
        StandardGame::with_config(config, rng()),
        Err(GameError::InvalidConfig(_))
    ));

    let config = GameConfig {
        fleet: &EMPTY,
        ..GameConfig::default()
    };
    assert!(matches!(
        StandardGame::with_config(config, rng()),
        Err(GameError::InvalidConfig(_))
    ));

    let config = GameConfig {
        max_placement_attempts: Some(0),
        ..GameConfig::default()
    };
    assert!(matches!(
        StandardGame::with_config(config, rng()),
        Err(GameError::InvalidConfig(_))
    ));

    assert!(matches!(
        GameController::<u64, 10>::with_config(GameConfig::default(), rng()),
        Err(GameError::BitBoard(BitBoardError::SizeTooLarge { .. }))
    ));
}

#[test]
fn battle_starts_for_every_seed() {
    for seed in 0..500 {
        let mut game = StandardGame::from_seed(seed).unwrap();
        place_layout(&mut game);
        game.begin_battle()
            .unwrap_or_else(|e| panic!("seed {}: {}", seed, e));
        assert_eq!(game.board(Side::Opponent).fleet().len(), FLEET.len());
    }
}

#[test]
fn randomize_fleet_lays_out_everything() {
    let mut game = StandardGame::from_seed(15).unwrap();
    game.place_next(LAYOUT[0]).unwrap();
    game.drain_events();

    game.randomize_fleet().unwrap();
    assert_eq!(game.placed_count(), FLEET.len());
    assert_eq!(game.next_ship(), None);
    let placed = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::ShipPlaced { .. }))
        .count();
    assert_eq!(placed, FLEET.len());

    game.begin_battle().unwrap();
    assert_eq!(game.randomize_fleet(), Err(GameError::WrongPhase));
}
