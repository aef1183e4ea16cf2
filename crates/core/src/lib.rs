//! Game cores - pure, deterministic, and testable
//!
//! Both games are discrete-time state machines with no I/O: a single owned
//! state per engine, command methods for input, an `advance()` tick, and a
//! read-only snapshot for renderers. Nothing here owns a clock.
//!
//! # Module Structure
//!
//! - [`maze`]: maze pursuit game (grid, stages, BFS pathfinding, watcher AI, mines)
//! - [`blocks`]: falling-block game (pieces, board, collision, queue, scoring)
//! - [`rng`]: injectable random sources (seeded LCG, thread RNG, scripted)
//! - [`sim`]: the [`Simulation`] trait drivers use for both games
//!
//! # Example
//!
//! ```
//! use grid_games_core::blocks::BlockEngine;
//! use grid_games_core::types::BlockAction;
//!
//! let mut game = BlockEngine::with_seed(12345);
//! game.start();
//!
//! game.apply_action(BlockAction::MoveRight);
//! game.apply_action(BlockAction::Rotate);
//! game.apply_action(BlockAction::HardDrop);
//!
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! ```
//!
//! ```
//! use grid_games_core::maze::{MazeEngine, StageSet};
//! use grid_games_core::types::{Direction, MazeAction};
//!
//! let stages = StageSet::builtin().unwrap();
//! let mut game = MazeEngine::with_seed(stages, 7);
//!
//! game.apply_action(MazeAction::Move(Direction::Right));
//! game.advance();
//! assert_eq!(game.snapshot().tick, 1);
//! ```

pub mod blocks;
pub mod maze;
pub mod rng;
pub mod sim;

pub use grid_games_types as types;

pub use blocks::{BlockEngine, BlockEvent, BlockSnapshot, Board, Piece, PieceQueue, Shape};
pub use maze::{find_path, Grid, MazeEngine, MazeEvent, MazeSnapshot, StageSet};
pub use rng::{RandomSource, ScriptedRandom, SimpleRng, ThreadRandom};
pub use sim::Simulation;
