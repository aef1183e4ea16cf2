//! Synchronous fixed-timestep driver
//!
//! For hosts that own their frame loop: feed the wall-clock time since the
//! last frame and the stepper runs as many whole ticks as fit, carrying the
//! remainder to the next call.

use std::time::Duration;

use grid_games_core::Simulation;

/// Upper bound on ticks run by a single update
pub const MAX_CATCH_UP_TICKS: u32 = 8;

#[derive(Debug, Clone, Default)]
pub struct FixedStepper {
    accumulated: Duration,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time carried over toward the next tick
    pub fn pending(&self) -> Duration {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Advance `sim` by `elapsed` and return the number of ticks performed.
    ///
    /// A halted simulation accumulates nothing. The tick interval is read
    /// again after every tick, so level changes take effect immediately.
    /// Lag beyond [`MAX_CATCH_UP_TICKS`] is dropped.
    pub fn update<S: Simulation>(&mut self, sim: &mut S, elapsed: Duration) -> u32 {
        if sim.is_halted() {
            self.reset();
            return 0;
        }

        self.accumulated += elapsed;
        let mut ticks = 0;
        loop {
            let interval = sim.tick_interval();
            if interval.is_zero() || self.accumulated < interval {
                break;
            }
            if ticks == MAX_CATCH_UP_TICKS {
                self.reset();
                break;
            }
            self.accumulated -= interval;
            sim.advance();
            ticks += 1;
            if sim.is_halted() {
                self.reset();
                break;
            }
        }
        ticks
    }
}
