//! Board state: one side's fleet plus per-cell attack and flag marks.

use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::{CellState, GameError};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::ship::ShipStatus;

/// One side's board.
///
/// Cell state is derived from four disjoint masks: `hits` and `misses` only
/// grow, and flags are never set on an attacked cell, so each cell is in
/// exactly one [`CellState`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    fleet: Fleet<T, N>,
    hits: BitBoard<T, N>,
    misses: BitBoard<T, N>,
    flags: BitBoard<T, N>,
}

impl<T, const N: usize> Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty board (no ships, no marks). Size is not checked here;
    /// marking a cell on a board too large for `T` fails with
    /// `GameError::BitBoard`.
    pub fn new() -> Self {
        Self::with_fleet(Fleet::new())
    }

    pub fn with_fleet(fleet: Fleet<T, N>) -> Self {
        Board {
            fleet,
            hits: BitBoard::new(),
            misses: BitBoard::new(),
            flags: BitBoard::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet<T, N> {
        &self.fleet
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut Fleet<T, N> {
        &mut self.fleet
    }

    pub fn hits(&self) -> BitBoard<T, N> {
        self.hits
    }

    pub fn misses(&self) -> BitBoard<T, N> {
        self.misses
    }

    pub fn flags(&self) -> BitBoard<T, N> {
        self.flags
    }

    /// State of the cell at `index`.
    pub fn cell(&self, index: usize) -> Result<CellState, GameError> {
        if !Grid::<N>::in_bounds(index) {
            return Err(GameError::IndexOutOfBounds(index));
        }
        Ok(if self.hits.contains(index) {
            CellState::Hit
        } else if self.misses.contains(index) {
            CellState::Miss
        } else if self.flags.contains(index) {
            CellState::Flagged
        } else if self.fleet.contains(index) {
            CellState::Occupied
        } else {
            CellState::Empty
        })
    }

    /// All cell states in index order.
    pub fn cells(&self) -> Vec<CellState> {
        (0..Grid::<N>::CELLS)
            .map(|i| self.cell(i).unwrap_or(CellState::Empty))
            .collect()
    }

    /// Flip the player annotation on an unattacked cell. Returns the new state.
    pub fn toggle_flag(&mut self, index: usize) -> Result<CellState, GameError> {
        match self.cell(index)? {
            CellState::Hit | CellState::Miss => Err(GameError::AlreadyResolved),
            _ => {
                self.flags.toggle(index)?;
                self.cell(index)
            }
        }
    }

    /// `true` once every ship cell has been hit.
    pub fn fleet_destroyed(&self) -> bool {
        self.fleet.is_destroyed(&self.hits)
    }

    pub fn fleet_status(&self) -> Vec<ShipStatus> {
        self.fleet.status(&self.hits)
    }

    pub(crate) fn mark_hit(&mut self, index: usize) -> Result<(), GameError> {
        self.hits.insert(index)?;
        Ok(())
    }

    pub(crate) fn mark_miss(&mut self, index: usize) -> Result<(), GameError> {
        self.misses.insert(index)?;
        Ok(())
    }
}

impl<T, const N: usize> Default for Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for Board<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  hits: {:?},\n  misses: {:?},\n  flags: {:?}\n}}",
            self.fleet.ships(),
            self.hits,
            self.misses,
            self.flags,
        )
    }
}
