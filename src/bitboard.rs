//! Fixed-size cell sets using const generics.
//!
//! A `BitBoard<T, N>` is a set of cell indices on an `N×N` board, packed into
//! the unsigned integer `T`. The type is `no_std` friendly and `Copy`, which
//! makes it the working currency for fleet occupancy, attack marks and the
//! bot's targeting memory.

use core::ops::BitOrAssign;
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::grid::Grid;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Cell index is outside `[0, N*N)`.
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { index } => {
                write!(f, "IndexOutOfBounds: index={}", index)
            }
        }
    }
}

/// A fixed-size N×N cell set stored in the unsigned integer `T`.
///
/// `new` does not check that `N*N` fits in `T`. On an oversized board every
/// write fails with [`BitBoardError::SizeTooLarge`] and every read reports an
/// unset cell; use [`BitBoard::try_new`] to detect the mismatch up front.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;
    /// Number of bits in `T`.
    const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Create a new empty bitboard without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        Self::check_size()?;
        Ok(Self::new())
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the board is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == Self::BOARD_BITS
    }

    /// Returns true if `index` is in bounds and set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < Self::BOARD_BITS
            && index < Self::CAPACITY
            && ((self.bits >> index) & T::one()) != T::zero()
    }

    /// Sets the cell at `index`.
    pub fn insert(&mut self, index: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(index)?;
        self.bits = self.bits | (T::one() << index);
        Ok(())
    }

    /// Toggles the cell at `index`, returning whether it is now set.
    pub fn toggle(&mut self, index: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(index)?;
        self.bits = self.bits ^ (T::one() << index);
        Ok(self.contains(index))
    }

    /// Returns true if every cell of `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & other.bits) == self.bits
    }

    /// Union of the 8-neighbourhoods of all set cells. A set cell appears in
    /// the result only when another set cell touches it.
    pub fn halo(&self) -> Self {
        let mut halo = Self::new();
        for index in self.iter() {
            for n in Grid::<N>::neighbors8(index) {
                // neighbours of a stored cell are on the board, which fits in T
                halo.bits = halo.bits | (T::one() << n);
            }
        }
        halo
    }

    #[inline]
    fn check_size() -> Result<(), BitBoardError> {
        if Self::BOARD_BITS > Self::CAPACITY {
            Err(BitBoardError::SizeTooLarge {
                n: N,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn check_bounds(index: usize) -> Result<(), BitBoardError> {
        Self::check_size()?;
        if index >= Self::BOARD_BITS {
            Err(BitBoardError::IndexOutOfBounds { index })
        } else {
            Ok(())
        }
    }

    /// Iterator over the set cell indices, ascending.
    #[inline]
    pub fn iter(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        fmt::Display::fmt(self, f)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r * N + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if self.board.contains(idx) {
                return Some(idx);
            }
        }
        None
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
