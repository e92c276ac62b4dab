//! Index arithmetic for a square `N×N` board.
//!
//! A cell index `i` lives in `[0, N*N)` with `row = i / N` and `col = i % N`.

/// Offsets of the eight surrounding cells as `(d_row, d_col)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Zero-sized addressing helper for an `N×N` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid<const N: usize>;

impl<const N: usize> Grid<N> {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    #[inline]
    pub const fn row_of(index: usize) -> usize {
        index / N
    }

    #[inline]
    pub const fn col_of(index: usize) -> usize {
        index % N
    }

    #[inline]
    pub const fn in_bounds(index: usize) -> bool {
        index < Self::CELLS
    }

    /// Index of `(row, col)`, or `None` when either coordinate is off the board.
    #[inline]
    pub const fn index(row: usize, col: usize) -> Option<usize> {
        if row < N && col < N {
            Some(row * N + col)
        } else {
            None
        }
    }

    /// The up-to-8 cells surrounding `index` that exist on the board.
    /// Yields nothing for an out-of-bounds index.
    pub fn neighbors8(index: usize) -> impl Iterator<Item = usize> {
        let origin = if Self::in_bounds(index) {
            Some((Self::row_of(index) as isize, Self::col_of(index) as isize))
        } else {
            None
        };
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let (row, col) = origin?;
            let (r, c) = (row + dr, col + dc);
            if r < 0 || c < 0 {
                return None;
            }
            Self::index(r as usize, c as usize)
        })
    }

    /// Chebyshev distance between two in-bounds cells.
    pub fn chebyshev(a: usize, b: usize) -> usize {
        let dr = Self::row_of(a).abs_diff(Self::row_of(b));
        let dc = Self::col_of(a).abs_diff(Self::col_of(b));
        dr.max(dc)
    }
}
