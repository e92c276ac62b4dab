//! Game orchestration: phases, turn alternation and the command surface
//! used by front ends.

use alloc::vec::Vec;
use log::{debug, info, warn};
use num_traits::{PrimInt, Unsigned, Zero};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    attack::attack,
    bitboard::BitBoard,
    board::Board,
    bot::{BotController, Shot},
    common::{AttackOutcome, CellState, GameError, Side, Winner},
    config::{GameConfig, BOARD_SIZE},
    events::GameEvent,
    generator::FleetGenerator,
    grid::Grid,
    placement::validate,
    ship::{Orientation, ShipClass, ShipStatus},
    win::evaluate,
};

/// Whose move it is during the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    PlayerTurn,
    BotTurn,
}

/// Lifecycle of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Battle,
    Terminal(Winner),
}

/// The standard 10×10 game.
pub type StandardGame = GameController<u128, BOARD_SIZE>;
pub type StandardBoard = Board<u128, BOARD_SIZE>;

/// Owns all state of one game and exposes the command surface.
///
/// Boards are only mutated by the side whose turn it is; the controller is
/// single-threaded and every command runs to completion.
pub struct GameController<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    config: GameConfig,
    generator: FleetGenerator,
    rng: SmallRng,
    phase: Phase,
    turn: Turn,
    orientation: Orientation,
    player: Board<T, N>,
    opponent: Board<T, N>,
    bot: BotController<T, N>,
    forfeit_available: bool,
    events: Vec<GameEvent>,
}

impl<T, const N: usize> GameController<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Standard configuration with a seeded RNG.
    pub fn from_seed(seed: u64) -> Result<Self, GameError> {
        Self::with_config(GameConfig::default(), SmallRng::seed_from_u64(seed))
    }

    /// Standard configuration with an RNG seeded from the OS.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Result<Self, GameError> {
        let mut seed_rng = rand::rng();
        Self::with_config(GameConfig::default(), SmallRng::from_rng(&mut seed_rng))
    }

    pub fn with_config(config: GameConfig, rng: SmallRng) -> Result<Self, GameError> {
        BitBoard::<T, N>::try_new()?;
        if config.fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet has no ships"));
        }
        if config.fleet.iter().any(|c| c.size() == 0 || c.size() > N) {
            return Err(GameError::InvalidConfig("ship size must be between 1 and N"));
        }
        if config.max_placement_attempts == Some(0) {
            return Err(GameError::InvalidConfig("placement attempts must be positive"));
        }
        Ok(Self {
            config,
            generator: FleetGenerator::new(config.max_placement_attempts),
            rng,
            phase: Phase::Placement,
            turn: Turn::PlayerTurn,
            orientation: Orientation::Horizontal,
            player: Board::new(),
            opponent: Board::new(),
            bot: BotController::new(),
            forfeit_available: false,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The turn flag; `None` outside the battle.
    pub fn turn(&self) -> Option<Turn> {
        match self.phase {
            Phase::Battle => Some(self.turn),
            _ => None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Rotate the ship about to be placed.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.events.push(GameEvent::OrientationChanged(self.orientation));
        self.orientation
    }

    /// Number of player ships placed so far (the placement cursor).
    pub fn placed_count(&self) -> usize {
        self.player.fleet().len()
    }

    /// The ship the next placement command will place.
    pub fn next_ship(&self) -> Option<ShipClass> {
        match self.phase {
            Phase::Placement => self.config.fleet.get(self.placed_count()).copied(),
            _ => None,
        }
    }

    /// Place the next ship at `start` with an explicit orientation.
    pub fn place_ship(
        &mut self,
        start: usize,
        orientation: Orientation,
    ) -> Result<Vec<usize>, GameError> {
        let class = self.next_ship().ok_or(GameError::WrongPhase)?;
        match self.player.fleet_mut().place(class, start, orientation) {
            Ok(ship) => {
                let cells = ship.cells().to_vec();
                info!("placed {} at {:?}", class.name(), cells);
                self.events.push(GameEvent::ShipPlaced {
                    ship: class.name(),
                    cells: cells.clone(),
                });
                Ok(cells)
            }
            Err(reason) => {
                debug!("rejected {} at {}: {:?}", class.name(), start, reason);
                self.events.push(GameEvent::PlacementRejected {
                    ship: class.name(),
                    start,
                    reason,
                });
                Err(GameError::PlacementRejected(reason))
            }
        }
    }

    /// Place the next ship at `start` using the current orientation.
    pub fn place_next(&mut self, start: usize) -> Result<Vec<usize>, GameError> {
        self.place_ship(start, self.orientation)
    }

    /// Place the next ship at a random legal position. Fails with
    /// `PlacementExhausted` when the ships already placed leave no room.
    pub fn place_random(&mut self) -> Result<Vec<usize>, GameError> {
        let class = self.next_ship().ok_or(GameError::WrongPhase)?;
        let cells = self
            .generator
            .place_one(&mut self.rng, self.player.fleet_mut(), class)?;
        info!("placed {} randomly at {:?}", class.name(), cells);
        self.events.push(GameEvent::ShipPlaced {
            ship: class.name(),
            cells: cells.clone(),
        });
        Ok(cells)
    }

    /// Replace the player's fleet with a complete random layout, discarding
    /// any ships placed so far.
    pub fn randomize_fleet(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        let fleet = self
            .generator
            .generate::<T, N, _>(&mut self.rng, self.config.fleet)?;
        for ship in fleet.ships() {
            self.events.push(GameEvent::ShipPlaced {
                ship: ship.class().name(),
                cells: ship.cells().to_vec(),
            });
        }
        info!("player fleet laid out randomly");
        self.player = Board::with_fleet(fleet);
        Ok(())
    }

    /// Footprint the next ship would take at `start`, without placing it.
    pub fn preview_placement(&self, start: usize) -> Option<Vec<usize>> {
        let class = self.next_ship()?;
        validate(start, class.size(), self.orientation, self.player.fleet()).ok()
    }

    /// Generate the opponent fleet and enter the battle.
    ///
    /// On `PlacementExhausted` the game stays in placement and should be
    /// restarted.
    pub fn begin_battle(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::WrongPhase);
        }
        if self.placed_count() < self.config.fleet.len() {
            return Err(GameError::NotAllShipsPlaced);
        }
        let fleet = self
            .generator
            .generate::<T, N, _>(&mut self.rng, self.config.fleet)
            .inspect_err(|e| warn!("opponent fleet generation failed: {}", e))?;
        self.opponent = Board::with_fleet(fleet);
        self.bot = BotController::new();
        self.phase = Phase::Battle;
        self.turn = Turn::PlayerTurn;
        info!("battle started");
        self.events.push(GameEvent::BattleStarted);
        self.events.push(GameEvent::TurnChanged(Turn::PlayerTurn));
        Ok(())
    }

    /// Player attack on the opponent board.
    ///
    /// A hit keeps the turn; a miss hands it to the bot. Attacking a cell that
    /// is already resolved changes nothing.
    pub fn attack_cell(&mut self, index: usize) -> Result<AttackOutcome, GameError> {
        if self.turn() != Some(Turn::PlayerTurn) {
            return Err(GameError::OutOfTurn);
        }
        if !Grid::<N>::in_bounds(index) {
            return Err(GameError::IndexOutOfBounds(index));
        }
        let outcome = attack(&mut self.opponent, index)?;
        debug!("player fires at {} -> {:?}", index, outcome);
        match outcome {
            AttackOutcome::AlreadyResolved => return Ok(outcome),
            AttackOutcome::Hit => {
                self.record_resolved(Side::Opponent, index, outcome);
                self.check_win();
            }
            AttackOutcome::Miss => {
                self.record_resolved(Side::Opponent, index, outcome);
                self.turn = Turn::BotTurn;
                self.events.push(GameEvent::TurnChanged(Turn::BotTurn));
            }
        }
        Ok(outcome)
    }

    /// Run the pending bot turn. Only valid while the bot holds the turn.
    pub fn bot_turn(&mut self) -> Result<Vec<Shot>, GameError> {
        if self.turn() != Some(Turn::BotTurn) {
            return Err(GameError::OutOfTurn);
        }
        let shots = self.bot.take_turn(&mut self.rng, &mut self.player)?;
        for shot in &shots {
            self.record_resolved(Side::Player, shot.index, shot.outcome);
        }
        self.check_win();
        if self.phase == Phase::Battle {
            self.turn = Turn::PlayerTurn;
            self.events.push(GameEvent::TurnChanged(Turn::PlayerTurn));
        }
        Ok(shots)
    }

    /// End the battle as a loss for the player. Ignored outside the battle.
    pub fn forfeit(&mut self) {
        if self.phase == Phase::Battle {
            info!("player forfeits");
            self.finish(Winner::Bot, true);
        } else {
            debug!("forfeit ignored in {:?}", self.phase);
        }
    }

    /// Offer the forfeit control. Returns `true` the first time during a battle.
    pub fn unlock_forfeit(&mut self) -> bool {
        if self.phase != Phase::Battle || self.forfeit_available {
            return false;
        }
        self.forfeit_available = true;
        self.events.push(GameEvent::ForfeitAvailable);
        true
    }

    pub fn forfeit_available(&self) -> bool {
        self.forfeit_available
    }

    /// Toggle the player's annotation on an opponent cell. Returns the cell
    /// as the player now sees it.
    pub fn toggle_flag(&mut self, index: usize) -> Result<CellState, GameError> {
        if self.phase != Phase::Battle {
            return Err(GameError::WrongPhase);
        }
        let state = self.opponent.toggle_flag(index)?;
        self.events.push(GameEvent::FlagToggled {
            index,
            flagged: state == CellState::Flagged,
        });
        self.cell(Side::Opponent, index)
    }

    /// Discard everything and start over from the initial configuration.
    /// The RNG carries on, so the next opponent fleet differs.
    pub fn restart(&mut self) {
        info!("restarting game");
        self.phase = Phase::Placement;
        self.turn = Turn::PlayerTurn;
        self.orientation = Orientation::Horizontal;
        self.player = Board::new();
        self.opponent = Board::new();
        self.bot = BotController::new();
        self.forfeit_available = false;
        self.events.clear();
        self.events.push(GameEvent::Restarted);
    }

    pub fn board(&self, side: Side) -> &Board<T, N> {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Cell state as shown to the player: unhit opponent ships read `Empty`.
    pub fn cell(&self, side: Side, index: usize) -> Result<CellState, GameError> {
        let state = self.board(side).cell(index)?;
        Ok(match (side, state) {
            (Side::Opponent, CellState::Occupied) => CellState::Empty,
            _ => state,
        })
    }

    /// All cells of `side` as shown to the player.
    pub fn cells(&self, side: Side) -> Vec<CellState> {
        (0..Grid::<N>::CELLS)
            .map(|i| self.cell(side, i).unwrap_or(CellState::Empty))
            .collect()
    }

    /// Per-ship destroyed/alive status for ship-list displays.
    pub fn fleet_status(&self, side: Side) -> Vec<ShipStatus> {
        self.board(side).fleet_status()
    }

    pub fn bot(&self) -> &BotController<T, N> {
        &self.bot
    }

    /// Take the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    fn record_resolved(&mut self, side: Side, index: usize, outcome: AttackOutcome) {
        self.events.push(GameEvent::CellResolved {
            side,
            index,
            outcome,
        });
        if outcome != AttackOutcome::Hit {
            return;
        }
        let board = self.board(side);
        let hits = board.hits();
        if let Some((ship, s)) = board.fleet().ship_at(index) {
            if s.is_destroyed(&hits) {
                let name = s.class().name();
                info!("{:?} {} destroyed", side, name);
                self.events
                    .push(GameEvent::ShipDestroyed { side, ship, name });
            }
        }
    }

    fn check_win(&mut self) {
        if let Some(winner) = evaluate(&self.player, &self.opponent) {
            self.finish(winner, false);
        }
    }

    fn finish(&mut self, winner: Winner, forfeit: bool) {
        self.phase = Phase::Terminal(winner);
        self.forfeit_available = false;
        info!("game over: {:?} wins", winner);
        self.events.push(GameEvent::GameOver { winner, forfeit });
    }
}
