//! Random fleet generation through the placement validator.

use alloc::vec::Vec;
use log::{debug, warn};
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{DEFAULT_MAX_FLEET_RESTARTS, DEFAULT_MAX_PLACEMENT_ATTEMPTS};
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::placement::validate;
use crate::ship::{Orientation, ShipClass};

/// Samples uniformly random placements until the validator accepts each ship.
///
/// Placing ships one after another can paint the board into a corner where a
/// later ship has no legal spot left. [`generate`](Self::generate) then drops
/// the partial fleet and starts over, up to `max_restarts` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetGenerator {
    max_attempts: Option<u32>,
    max_restarts: u32,
}

impl FleetGenerator {
    /// `max_attempts` caps the samples spent on each ship; `None` retries
    /// until the validator accepts.
    pub fn new(max_attempts: Option<u32>) -> Self {
        Self {
            max_attempts,
            max_restarts: DEFAULT_MAX_FLEET_RESTARTS,
        }
    }

    pub fn with_max_restarts(mut self, max_restarts: u32) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    pub fn max_restarts(&self) -> u32 {
        self.max_restarts
    }

    /// Build a fresh fleet containing `classes` in order.
    pub fn generate<T, const N: usize, R: Rng>(
        &self,
        rng: &mut R,
        classes: &[ShipClass],
    ) -> Result<Fleet<T, N>, GameError>
    where
        T: PrimInt + Unsigned + Zero,
    {
        for &class in classes {
            check_class::<T, N>(class)?;
        }
        let mut restarts = 0;
        loop {
            match self.fill(rng, classes) {
                Ok(fleet) => {
                    debug!(
                        "generated fleet of {} ships after {} restarts",
                        fleet.len(),
                        restarts
                    );
                    return Ok(fleet);
                }
                Err(err @ GameError::PlacementExhausted { .. }) if restarts < self.max_restarts => {
                    restarts += 1;
                    debug!("{}; regenerating fleet (restart {})", err, restarts);
                }
                Err(err) => {
                    warn!("fleet generation failed after {} restarts: {}", restarts, err);
                    return Err(err);
                }
            }
        }
    }

    fn fill<T, const N: usize, R: Rng>(
        &self,
        rng: &mut R,
        classes: &[ShipClass],
    ) -> Result<Fleet<T, N>, GameError>
    where
        T: PrimInt + Unsigned + Zero,
    {
        let mut fleet = Fleet::new();
        for &class in classes {
            self.place_one(rng, &mut fleet, class)?;
        }
        Ok(fleet)
    }

    /// Add one randomly placed ship of `class` to `fleet`, returning its cells.
    ///
    /// Fails with `PlacementExhausted` without sampling when no legal spot is
    /// left, or once `max_attempts` samples have been rejected.
    pub fn place_one<T, const N: usize, R: Rng>(
        &self,
        rng: &mut R,
        fleet: &mut Fleet<T, N>,
        class: ShipClass,
    ) -> Result<Vec<usize>, GameError>
    where
        T: PrimInt + Unsigned + Zero,
    {
        check_class::<T, N>(class)?;
        if !has_room(fleet, class) {
            return Err(GameError::PlacementExhausted {
                ship: class.name(),
                attempts: 0,
            });
        }
        let mut attempts: u32 = 0;
        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    debug!("gave up placing {} after {} attempts", class.name(), attempts);
                    return Err(GameError::PlacementExhausted {
                        ship: class.name(),
                        attempts,
                    });
                }
            }
            attempts = attempts.saturating_add(1);
            let orientation = Orientation::from(rng.random::<bool>());
            let start = rng.random_range(0..Grid::<N>::CELLS);
            if let Ok(ship) = fleet.place(class, start, orientation) {
                return Ok(ship.cells().to_vec());
            }
        }
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_PLACEMENT_ATTEMPTS))
    }
}

/// Rejects boards too large for `T` and classes that can never fit.
fn check_class<T, const N: usize>(class: ShipClass) -> Result<(), GameError>
where
    T: PrimInt + Unsigned + Zero,
{
    BitBoard::<T, N>::try_new()?;
    if class.size() == 0 || class.size() > N {
        return Err(GameError::InvalidConfig("ship size must be between 1 and N"));
    }
    Ok(())
}

/// True when at least one (start, orientation) pair is legal for `class`.
fn has_room<T, const N: usize>(fleet: &Fleet<T, N>, class: ShipClass) -> bool
where
    T: PrimInt + Unsigned + Zero,
{
    (0..Grid::<N>::CELLS).any(|start| {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .any(|o| validate(start, class.size(), o, fleet).is_ok())
    })
}
