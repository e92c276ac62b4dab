//! The automated opponent: uniform random targeting that keeps firing after
//! every hit and yields the turn on a miss.

use alloc::vec::Vec;
use log::debug;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::attack::attack;
use crate::bitboard::BitBoard;
use crate::board::Board;
use crate::common::{AttackOutcome, GameError};
use crate::grid::Grid;

/// One resolved bot attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub index: usize,
    pub outcome: AttackOutcome,
}

/// Turn state of the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotState {
    /// Choosing and firing at targets.
    Targeting,
    /// The turn is over; control returns to the player.
    Done,
}

/// Bot turn driver with a whole-game memory of targeted cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotController<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    memory: BitBoard<T, N>,
    state: BotState,
}

impl<T, const N: usize> BotController<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    pub fn new() -> Self {
        Self {
            memory: BitBoard::new(),
            state: BotState::Done,
        }
    }

    /// Every cell the bot has fired at this game.
    pub fn memory(&self) -> BitBoard<T, N> {
        self.memory
    }

    pub fn state(&self) -> BotState {
        self.state
    }

    /// Uniformly random cell not yet in memory, by rejection sampling.
    /// `None` once every cell has been targeted.
    pub fn pick_target<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.memory.is_full() {
            return None;
        }
        loop {
            let index = rng.random_range(0..Grid::<N>::CELLS);
            if !self.memory.contains(index) {
                return Some(index);
            }
        }
    }

    /// One `Targeting` iteration: pick, remember, resolve. Moves to `Done`
    /// on anything but a hit, or when nothing is left to target.
    pub fn step<R: Rng>(
        &mut self,
        rng: &mut R,
        board: &mut Board<T, N>,
    ) -> Result<Option<Shot>, GameError> {
        let Some(index) = self.pick_target(rng) else {
            self.state = BotState::Done;
            return Ok(None);
        };
        self.memory.insert(index)?;
        let outcome = attack(board, index)?;
        debug!("bot fires at {} -> {:?}", index, outcome);
        if outcome != AttackOutcome::Hit {
            self.state = BotState::Done;
        }
        Ok(Some(Shot { index, outcome }))
    }

    /// Run a full turn against `board` and return the shots in order.
    ///
    /// The turn stops at the first miss, or after a hit that leaves the fleet
    /// destroyed, so it never fires at a dead fleet and makes at most `N*N`
    /// attacks.
    pub fn take_turn<R: Rng>(
        &mut self,
        rng: &mut R,
        board: &mut Board<T, N>,
    ) -> Result<Vec<Shot>, GameError> {
        let mut shots = Vec::new();
        self.state = BotState::Targeting;
        while self.state == BotState::Targeting {
            if board.fleet_destroyed() {
                self.state = BotState::Done;
                break;
            }
            if let Some(shot) = self.step(rng, board)? {
                shots.push(shot);
            }
        }
        Ok(shots)
    }
}

impl<T, const N: usize> Default for BotController<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}
