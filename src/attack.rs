//! Attack resolution against a single board.

use num_traits::{PrimInt, Unsigned, Zero};

use crate::board::Board;
use crate::common::{AttackOutcome, GameError};

/// Apply one attack at `index`.
///
/// A cell that is already `Hit`, `Miss` or `Flagged` yields
/// `AlreadyResolved` and the board is left untouched; otherwise the cell
/// becomes `Hit` when a ship covers it and `Miss` when none does.
pub fn attack<T, const N: usize>(
    board: &mut Board<T, N>,
    index: usize,
) -> Result<AttackOutcome, GameError>
where
    T: PrimInt + Unsigned + Zero,
{
    if board.cell(index)?.is_resolved() {
        return Ok(AttackOutcome::AlreadyResolved);
    }
    if board.fleet().contains(index) {
        board.mark_hit(index)?;
        Ok(AttackOutcome::Hit)
    } else {
        board.mark_miss(index)?;
        Ok(AttackOutcome::Miss)
    }
}
