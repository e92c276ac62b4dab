//! A side's set of ships plus the occupancy masks placement checks against.

use alloc::vec::Vec;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::Rejection;
use crate::placement::validate;
use crate::ship::{Orientation, Ship, ShipClass, ShipStatus};

/// Ships owned by one side.
///
/// Ships can only be added through [`Fleet::place`], which runs the
/// placement validator, so no two ships overlap or touch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fleet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ships: Vec<Ship<T, N>>,
    occupied: BitBoard<T, N>,
    halo: BitBoard<T, N>,
}

impl<T, const N: usize> Fleet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// An empty fleet. When `N*N` does not fit in `T` every placement is
    /// rejected as `OutOfBounds`; see [`BitBoard::try_new`].
    pub fn new() -> Self {
        Self {
            ships: Vec::new(),
            occupied: BitBoard::new(),
            halo: BitBoard::new(),
        }
    }

    /// Validate and append a ship of `class` at `start`.
    pub fn place(
        &mut self,
        class: ShipClass,
        start: usize,
        orientation: Orientation,
    ) -> Result<&Ship<T, N>, Rejection> {
        let cells = validate(start, class.size(), orientation, self)?;
        let mut mask = BitBoard::new();
        for &index in &cells {
            // fails only when the board does not fit in `T`
            mask.insert(index).map_err(|_| Rejection::OutOfBounds)?;
        }
        self.occupied |= mask;
        self.halo |= mask.halo();
        self.ships.push(Ship::from_footprint(class, orientation, cells, mask));
        Ok(&self.ships[self.ships.len() - 1])
    }

    pub fn ships(&self) -> &[Ship<T, N>] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Every cell covered by a ship.
    pub fn occupied(&self) -> BitBoard<T, N> {
        self.occupied
    }

    /// Every cell adjacent (8-neighbourhood) to a ship cell.
    pub fn halo(&self) -> BitBoard<T, N> {
        self.halo
    }

    pub fn contains(&self, index: usize) -> bool {
        self.occupied.contains(index)
    }

    /// The ship covering `index`, with its position in the fleet.
    pub fn ship_at(&self, index: usize) -> Option<(usize, &Ship<T, N>)> {
        if !self.contains(index) {
            return None;
        }
        self.ships.iter().enumerate().find(|(_, s)| s.contains(index))
    }

    /// `true` when the fleet is non-empty and every ship cell is in `hits`.
    pub fn is_destroyed(&self, hits: &BitBoard<T, N>) -> bool {
        !self.ships.is_empty() && self.occupied.is_subset(hits)
    }

    /// Per-ship status in placement order.
    pub fn status(&self, hits: &BitBoard<T, N>) -> Vec<ShipStatus> {
        self.ships.iter().map(|s| s.status(hits)).collect()
    }
}

impl<T, const N: usize> Default for Fleet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}
