//! Common driving surface for both games
//!
//! Engines only advance when told to. A driver (see the engine crate) owns
//! the clock, calls [`Simulation::advance`] every [`Simulation::tick_interval`]
//! and forwards input through [`Simulation::apply`].

use std::fmt::Debug;
use std::time::Duration;

use crate::blocks::{BlockEngine, BlockSnapshot};
use crate::maze::{MazeEngine, MazeSnapshot};
use crate::rng::RandomSource;
use crate::types::{BlockAction, MazeAction};

pub trait Simulation {
    type Action: Copy + Debug + Send + 'static;
    type Snapshot: Clone + Debug + Send + Sync + 'static;

    /// Prepare the first playable state. Called once by drivers before ticking.
    fn start(&mut self) {}

    /// Apply an input command; false when it was absorbed as a no-op
    fn apply(&mut self, action: Self::Action) -> bool;

    /// Whether `action` starts the game over; drivers restart their clock on it
    fn is_restart(action: &Self::Action) -> bool;

    /// One fixed-period tick; false when nothing advanced
    fn advance(&mut self) -> bool;

    fn tick_interval(&self) -> Duration;

    /// Terminal state reached; ticking is pointless until a restart
    fn is_halted(&self) -> bool;

    fn snapshot(&self) -> Self::Snapshot;
}

impl<R: RandomSource> Simulation for MazeEngine<R> {
    type Action = MazeAction;
    type Snapshot = MazeSnapshot;

    fn apply(&mut self, action: MazeAction) -> bool {
        self.apply_action(action)
    }

    fn is_restart(action: &MazeAction) -> bool {
        matches!(action, MazeAction::Restart)
    }

    fn advance(&mut self) -> bool {
        MazeEngine::advance(self)
    }

    fn tick_interval(&self) -> Duration {
        MazeEngine::tick_interval(self)
    }

    fn is_halted(&self) -> bool {
        !self.is_playing()
    }

    fn snapshot(&self) -> MazeSnapshot {
        MazeEngine::snapshot(self)
    }
}

impl<R: RandomSource> Simulation for BlockEngine<R> {
    type Action = BlockAction;
    type Snapshot = BlockSnapshot;

    fn start(&mut self) {
        BlockEngine::start(self);
    }

    fn apply(&mut self, action: BlockAction) -> bool {
        self.apply_action(action)
    }

    fn is_restart(action: &BlockAction) -> bool {
        matches!(action, BlockAction::Restart)
    }

    fn advance(&mut self) -> bool {
        BlockEngine::advance(self)
    }

    fn tick_interval(&self) -> Duration {
        BlockEngine::tick_interval(self)
    }

    fn is_halted(&self) -> bool {
        self.game_over() || !self.started()
    }

    fn snapshot(&self) -> BlockSnapshot {
        BlockEngine::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::StageSet;
    use crate::types::MAZE_TICK_MS;

    fn drive<S: Simulation>(sim: &mut S, ticks: usize) -> usize {
        sim.start();
        (0..ticks).filter(|_| sim.advance()).count()
    }

    #[test]
    fn test_maze_through_trait() {
        let mut maze = MazeEngine::with_seed(StageSet::builtin().unwrap(), 1);
        assert_eq!(
            Simulation::tick_interval(&maze),
            Duration::from_millis(u64::from(MAZE_TICK_MS))
        );
        assert!(!Simulation::is_halted(&maze));
        let ticks = drive(&mut maze, 3);
        assert!(ticks >= 1);
        assert_eq!(Simulation::snapshot(&maze).tick, ticks as u64);
    }

    #[test]
    fn test_block_halted_until_started() {
        let mut blocks = BlockEngine::with_seed(9);
        assert!(Simulation::is_halted(&blocks));
        assert_eq!(drive(&mut blocks, 5), 5);
        assert!(!Simulation::is_halted(&blocks));
        assert_eq!(Simulation::snapshot(&blocks).current.unwrap().y, 5);
    }
}
