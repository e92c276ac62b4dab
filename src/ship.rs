//! Ship classes and placed ships.

use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }

    /// The other orientation (the rotate key).
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl From<bool> for Orientation {
    /// `true` means horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type of ship: display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Per-ship view for ship-list displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipStatus {
    pub name: &'static str,
    pub size: usize,
    pub destroyed: bool,
}

/// A placed ship: an immutable, ordered footprint of contiguous cells.
///
/// Ships are only built from footprints accepted by
/// [`validate`](crate::placement::validate), so the cells are always in one
/// row or one column with a step of `1` or `N`.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<usize>,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    pub(crate) fn from_footprint(
        class: ShipClass,
        orientation: Orientation,
        cells: Vec<usize>,
        mask: BitBoard<T, N>,
    ) -> Self {
        Ship {
            class,
            orientation,
            cells,
            mask,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Footprint in placement order, starting at the origin cell.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// First cell of the footprint.
    pub fn origin(&self) -> usize {
        self.cells[0]
    }

    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    pub fn contains(&self, index: usize) -> bool {
        self.mask.contains(index)
    }

    /// A ship is destroyed once every one of its cells is in `hits`.
    pub fn is_destroyed(&self, hits: &BitBoard<T, N>) -> bool {
        self.mask.is_subset(hits)
    }

    pub fn status(&self, hits: &BitBoard<T, N>) -> ShipStatus {
        ShipStatus {
            name: self.class.name(),
            size: self.class.size(),
            destroyed: self.is_destroyed(hits),
        }
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", orientation: {:?}, cells: {:?} }}",
            self.class.name(),
            self.orientation,
            self.cells,
        )
    }
}
