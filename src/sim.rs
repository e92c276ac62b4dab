//! Headless full game: a random-firing stand-in for the player against the bot.

use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    bitboard::BitBoard,
    common::{AttackOutcome, GameError, Winner},
    config::{GameConfig, BOARD_SIZE},
    game::{Phase, StandardGame, Turn},
    grid::Grid,
};

/// Summary of a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SimReport {
    pub seed: u64,
    pub winner: Winner,
    /// Player attacks, including hits that kept the turn.
    pub player_shots: usize,
    pub bot_shots: usize,
    /// Number of bot turns played.
    pub rounds: usize,
}

/// Play a whole game from `seed` with no delays.
pub fn simulate(seed: u64) -> Result<SimReport, GameError> {
    let mut game = StandardGame::with_config(GameConfig::default(), SmallRng::seed_from_u64(seed))?;
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    game.randomize_fleet()?;
    game.begin_battle()?;

    let mut fired = BitBoard::<u128, BOARD_SIZE>::new();
    let mut player_shots = 0;
    let mut bot_shots = 0;
    let mut rounds = 0;
    loop {
        match (game.phase(), game.turn()) {
            (Phase::Terminal(winner), _) => {
                info!("simulation {} finished: {:?} after {} rounds", seed, winner, rounds);
                return Ok(SimReport {
                    seed,
                    winner,
                    player_shots,
                    bot_shots,
                    rounds,
                });
            }
            (_, Some(Turn::BotTurn)) => {
                bot_shots += game.bot_turn()?.len();
                rounds += 1;
            }
            _ => {
                let index = loop {
                    let i = rng.random_range(0..Grid::<BOARD_SIZE>::CELLS);
                    if !fired.contains(i) {
                        break i;
                    }
                };
                fired.insert(index)?;
                if game.attack_cell(index)? != AttackOutcome::AlreadyResolved {
                    player_shots += 1;
                }
            }
        }
        game.drain_events();
    }
}
