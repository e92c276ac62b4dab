//! Placement legality: the single authority for both interactive placement
//! and random fleet generation.

use alloc::vec::Vec;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Rejection;
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::ship::Orientation;

/// Decide whether a ship of `size` cells starting at `start` may join `fleet`.
///
/// On success returns the footprint in order from `start`, stepping by `1`
/// (horizontal) or `N` (vertical). The fleet is never modified.
pub fn validate<T, const N: usize>(
    start: usize,
    size: usize,
    orientation: Orientation,
    fleet: &Fleet<T, N>,
) -> Result<Vec<usize>, Rejection>
where
    T: PrimInt + Unsigned + Zero,
{
    if size == 0 || !Grid::<N>::in_bounds(start) {
        return Err(Rejection::OutOfBounds);
    }
    let step = match orientation {
        Orientation::Horizontal => 1,
        Orientation::Vertical => N,
    };

    let mut cells = Vec::with_capacity(size);
    for i in 0..size {
        let index = i
            .checked_mul(step)
            .and_then(|offset| start.checked_add(offset))
            .filter(|&index| Grid::<N>::in_bounds(index))
            .ok_or(Rejection::OutOfBounds)?;
        match orientation {
            Orientation::Horizontal if Grid::<N>::row_of(index) != Grid::<N>::row_of(start) => {
                return Err(Rejection::WrapsRow);
            }
            Orientation::Vertical if Grid::<N>::col_of(index) != Grid::<N>::col_of(start) => {
                return Err(Rejection::WrapsColumn);
            }
            _ => {}
        }
        cells.push(index);
    }

    let occupied = fleet.occupied();
    if cells.iter().any(|&i| occupied.contains(i)) {
        return Err(Rejection::Overlaps);
    }
    // The halo holds every cell adjacent to an existing ship, so a candidate
    // inside it has an 8-neighbour in the fleet.
    let halo = fleet.halo();
    if cells.iter().any(|&i| halo.contains(i)) {
        return Err(Rejection::Touches);
    }
    Ok(cells)
}
