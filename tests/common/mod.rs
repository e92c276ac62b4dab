#![allow(dead_code)]

use broadside::{Fleet, FleetGenerator, Grid, Orientation, Side, StandardGame, BOARD_SIZE, FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub type StdFleet = Fleet<u128, BOARD_SIZE>;
pub type G = Grid<BOARD_SIZE>;

/// Legal starts for the standard fleet in placement order, all horizontal:
/// patrol boats on row 8, then destroyer, submarine, battleship and carrier
/// on rows 6, 4, 2 and 0.
pub const LAYOUT: [usize; 9] = [80, 82, 84, 86, 88, 60, 40, 20, 0];

pub fn place_layout(game: &mut StandardGame) {
    for start in LAYOUT {
        game.place_ship(start, Orientation::Horizontal).unwrap();
    }
}

pub fn battle_game(seed: u64) -> StandardGame {
    let mut game = StandardGame::from_seed(seed).unwrap();
    place_layout(&mut game);
    game.begin_battle().unwrap();
    game.drain_events();
    game
}

pub fn random_fleet(seed: u64) -> StdFleet {
    let mut rng = SmallRng::seed_from_u64(seed);
    FleetGenerator::default().generate(&mut rng, &FLEET).unwrap()
}

/// First opponent cell without a ship.
pub fn opponent_water(game: &StandardGame) -> usize {
    (0..G::CELLS)
        .find(|&i| !game.board(Side::Opponent).fleet().contains(i))
        .unwrap()
}

/// True when no two distinct ships have cells within Chebyshev distance 1.
pub fn no_two_ships_touch(fleet: &StdFleet) -> bool {
    let ships = fleet.ships();
    for (a, sa) in ships.iter().enumerate() {
        for sb in &ships[a + 1..] {
            for &x in sa.cells() {
                for &y in sb.cells() {
                    if G::chebyshev(x, y) <= 1 {
                        return false;
                    }
                }
            }
        }
    }
    true
}
