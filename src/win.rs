use num_traits::{PrimInt, Unsigned, Zero};

use crate::board::Board;
use crate::common::Winner;

/// Check both boards for a destroyed fleet.
///
/// The opponent's fleet is checked first. Only one board changes per attack,
/// so both fleets can never fall on the same move.
pub fn evaluate<T, const N: usize>(
    player: &Board<T, N>,
    opponent: &Board<T, N>,
) -> Option<Winner>
where
    T: PrimInt + Unsigned + Zero,
{
    if opponent.fleet_destroyed() {
        Some(Winner::Player)
    } else if player.fleet_destroyed() {
        Some(Winner::Bot)
    } else {
        None
    }
}
