#![cfg(feature = "std")]

//! Async wrapper around [`StandardGame`] that paces the bot and reveals the
//! forfeit control with cancellable deferred tasks.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::{
    common::{AttackOutcome, CellState, GameError},
    events::GameEvent,
    game::{Phase, StandardGame, Turn},
    ship::Orientation,
};

/// Receiver of game events (renderer, audio, message display).
#[async_trait::async_trait]
pub trait EventSink: Send + Sync {
    async fn publish(&self, event: GameEvent);
}

/// Forwards events into an unbounded channel.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl EventSink for ChannelSink {
    async fn publish(&self, event: GameEvent) {
        // a dropped receiver just means nobody is rendering
        let _ = self.tx.send(event);
    }
}

/// Writes every event to the log at debug level.
pub struct LogSink;

#[async_trait::async_trait]
impl EventSink for LogSink {
    async fn publish(&self, event: GameEvent) {
        debug!("event: {:?}", event);
    }
}

#[derive(Debug, Clone, Copy)]
enum Deferred {
    BotTurn,
    UnlockForfeit,
}

struct State {
    game: StandardGame,
    /// Bumped on forfeit and restart; tasks scheduled under an older epoch
    /// do nothing when they wake.
    epoch: u64,
    pending: Vec<JoinHandle<()>>,
}

impl State {
    fn cancel_pending(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

struct Shared<S> {
    state: Mutex<State>,
    sink: S,
}

impl<S: EventSink + 'static> Shared<S> {
    async fn flush(&self, state: &mut State) {
        for event in state.game.drain_events() {
            self.sink.publish(event).await;
        }
    }

    async fn run_deferred(&self, epoch: u64, action: Deferred) {
        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            debug!("dropping stale {:?}", action);
            return;
        }
        match action {
            Deferred::BotTurn => match state.game.bot_turn() {
                Ok(shots) => debug!("bot turn fired {} shots", shots.len()),
                Err(e) => debug!("bot turn skipped: {}", e),
            },
            Deferred::UnlockForfeit => {
                state.game.unlock_forfeit();
            }
        }
        self.flush(&mut state).await;
    }
}

/// Shared handle to a running game. Cloning yields another handle to the
/// same game.
pub struct Session<S: EventSink + 'static> {
    shared: Arc<Shared<S>>,
}

impl<S: EventSink + 'static> Clone for Session<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: EventSink + 'static> Session<S> {
    pub fn new(game: StandardGame, sink: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    game,
                    epoch: 0,
                    pending: Vec::new(),
                }),
                sink,
            }),
        }
    }

    /// Run a read-only query against the game.
    pub async fn read<R>(&self, f: impl FnOnce(&StandardGame) -> R) -> R {
        let state = self.shared.state.lock().await;
        f(&state.game)
    }

    async fn command<R>(&self, f: impl FnOnce(&mut StandardGame) -> R) -> R {
        let mut state = self.shared.state.lock().await;
        let result = f(&mut state.game);
        self.shared.flush(&mut state).await;
        result
    }

    fn schedule(&self, state: &mut State, delay: Duration, action: Deferred) {
        state.pending.retain(|h| !h.is_finished());
        let epoch = state.epoch;
        let shared = Arc::clone(&self.shared);
        debug!("scheduling {:?} in {:?}", action, delay);
        state.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.run_deferred(epoch, action).await;
        }));
    }

    pub async fn place_ship(
        &self,
        start: usize,
        orientation: Orientation,
    ) -> Result<Vec<usize>, GameError> {
        self.command(|g| g.place_ship(start, orientation)).await
    }

    pub async fn place_next(&self, start: usize) -> Result<Vec<usize>, GameError> {
        self.command(|g| g.place_next(start)).await
    }

    pub async fn place_random(&self) -> Result<Vec<usize>, GameError> {
        self.command(|g| g.place_random()).await
    }

    pub async fn randomize_fleet(&self) -> Result<(), GameError> {
        self.command(|g| g.randomize_fleet()).await
    }

    pub async fn toggle_orientation(&self) -> Orientation {
        self.command(|g| g.toggle_orientation()).await
    }

    pub async fn preview_placement(&self, start: usize) -> Option<Vec<usize>> {
        self.read(|g| g.preview_placement(start)).await
    }

    /// Start the battle and schedule the forfeit reveal.
    pub async fn begin_battle(&self) -> Result<(), GameError> {
        let mut state = self.shared.state.lock().await;
        let result = state.game.begin_battle();
        if result.is_ok() {
            let delay = state.game.config().forfeit_unlock_delay;
            self.schedule(&mut state, delay, Deferred::UnlockForfeit);
        }
        self.shared.flush(&mut state).await;
        result
    }

    /// Player attack. The bot's reply is scheduled only after the attack
    /// has been applied and win-checked.
    pub async fn attack_cell(&self, index: usize) -> Result<AttackOutcome, GameError> {
        let mut state = self.shared.state.lock().await;
        let result = state.game.attack_cell(index);
        match state.game.phase() {
            Phase::Terminal(_) => state.cancel_pending(),
            Phase::Battle if state.game.turn() == Some(Turn::BotTurn) && result.is_ok() => {
                let delay = state.game.config().bot_delay;
                self.schedule(&mut state, delay, Deferred::BotTurn);
            }
            _ => {}
        }
        self.shared.flush(&mut state).await;
        result
    }

    pub async fn toggle_flag(&self, index: usize) -> Result<CellState, GameError> {
        self.command(|g| g.toggle_flag(index)).await
    }

    /// Forfeit immediately, cancelling any pending bot turn.
    pub async fn forfeit(&self) {
        let mut state = self.shared.state.lock().await;
        if state.game.phase() == Phase::Battle {
            state.cancel_pending();
        }
        state.game.forfeit();
        self.shared.flush(&mut state).await;
    }

    /// Throw the game away and start over.
    pub async fn restart(&self) {
        let mut state = self.shared.state.lock().await;
        state.cancel_pending();
        state.game.restart();
        self.shared.flush(&mut state).await;
    }
}
