use core::time::Duration;

use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;

/// Ships in placement order.
pub const NUM_SHIPS: usize = 9;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Patrol Boat 1", 1),
    ShipClass::new("Patrol Boat 2", 1),
    ShipClass::new("Patrol Boat 3", 1),
    ShipClass::new("Patrol Boat 4", 1),
    ShipClass::new("Patrol Boat 5", 1),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Carrier", 5),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 2 + 3 + 4 + 5;

pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
/// Whole-fleet regenerations allowed after a random layout runs into a dead end.
pub const DEFAULT_MAX_FLEET_RESTARTS: u32 = 100;
pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_FORFEIT_UNLOCK_DELAY: Duration = Duration::from_secs(30);

/// Tunables for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Ship classes in placement order, used for both sides.
    pub fleet: &'static [ShipClass],
    /// Random placement attempts per ship before giving up; `None` retries
    /// forever.
    pub max_placement_attempts: Option<u32>,
    /// Pause between the player's miss and the bot's reply.
    pub bot_delay: Duration,
    /// Time after battle start before the forfeit control is offered.
    pub forfeit_unlock_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fleet: &FLEET,
            max_placement_attempts: Some(DEFAULT_MAX_PLACEMENT_ATTEMPTS),
            bot_delay: DEFAULT_BOT_DELAY,
            forfeit_unlock_delay: DEFAULT_FORFEIT_UNLOCK_DELAY,
        }
    }
}

