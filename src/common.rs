//! Common types: cell states, attack outcomes, sides and engine errors.

use crate::bitboard::BitBoardError;

/// State of one board cell. Exactly one holds per cell at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    /// Ship present, not yet attacked.
    Occupied,
    Hit,
    Miss,
    /// Player annotation with no gameplay effect.
    Flagged,
}

impl CellState {
    /// `Hit`, `Miss` and `Flagged` cells can no longer be attacked.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Flagged)
    }
}

/// Result of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The cell was already attacked or flagged; nothing changed.
    AlreadyResolved,
    Hit,
    Miss,
}

/// Which board a command or query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

/// Winner of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Bot,
}

/// Why a proposed footprint was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// A candidate cell is outside the board.
    OutOfBounds,
    /// A horizontal footprint crosses the right edge into the next row.
    WrapsRow,
    /// A vertical footprint leaves the start column.
    WrapsColumn,
    /// A candidate cell is already part of a ship.
    Overlaps,
    /// A candidate cell touches an existing ship, diagonals included.
    Touches,
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// The placement validator refused the footprint; nothing changed.
    PlacementRejected(Rejection),
    /// The cell was already attacked; nothing changed.
    AlreadyResolved,
    /// Battle requested before the whole fleet was placed.
    NotAllShipsPlaced,
    /// Attack issued outside the caller's turn or outside the battle.
    OutOfTurn,
    /// The command is not available in the current phase.
    WrongPhase,
    /// Index is outside the board.
    IndexOutOfBounds(usize),
    /// Random fleet generation gave up on a ship.
    PlacementExhausted { ship: &'static str, attempts: u32 },
    /// The configuration cannot describe a playable game.
    InvalidConfig(&'static str),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::PlacementRejected(r) => write!(f, "Ship placement rejected: {:?}", r),
            GameError::AlreadyResolved => write!(f, "Cell has already been attacked"),
            GameError::NotAllShipsPlaced => write!(f, "Not all ships have been placed"),
            GameError::OutOfTurn => write!(f, "It is not your turn"),
            GameError::WrongPhase => write!(f, "Command not available in this phase"),
            GameError::IndexOutOfBounds(i) => write!(f, "Cell index {} is out of range", i),
            GameError::PlacementExhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship, attempts
            ),
            GameError::InvalidConfig(why) => write!(f, "Invalid configuration: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
