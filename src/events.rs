//! State deltas emitted for rendering, audio and message collaborators.

use alloc::vec::Vec;

use crate::common::{AttackOutcome, Rejection, Side, Winner};
use crate::game::Turn;
use crate::ship::Orientation;

/// Something a collaborator may want to show or play.
///
/// The controller queues events as commands run; callers collect them with
/// [`GameController::drain_events`](crate::GameController::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameEvent {
    ShipPlaced {
        ship: &'static str,
        cells: Vec<usize>,
    },
    PlacementRejected {
        ship: &'static str,
        start: usize,
        reason: Rejection,
    },
    OrientationChanged(Orientation),
    BattleStarted,
    CellResolved {
        side: Side,
        index: usize,
        outcome: AttackOutcome,
    },
    /// Every cell of a ship is now hit. `ship` is its position in the fleet.
    ShipDestroyed {
        side: Side,
        ship: usize,
        name: &'static str,
    },
    FlagToggled {
        index: usize,
        flagged: bool,
    },
    TurnChanged(Turn),
    /// The forfeit control may now be offered to the player.
    ForfeitAvailable,
    GameOver {
        winner: Winner,
        forfeit: bool,
    },
    Restarted,
}
