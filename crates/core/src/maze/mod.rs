//! Maze pursuit game core
//!
//! - [`grid`]: static stage layout with the goal located once at load
//! - [`stage`]: stage data loading and validation
//! - [`path`]: breadth-first shortest paths
//! - [`watcher`]: search/chase watcher behavior and the facing test
//! - [`engine`]: the game state machine
//! - [`snapshot`]: read-only projection for renderers

pub mod engine;
pub mod grid;
pub mod path;
pub mod snapshot;
pub mod stage;
pub mod watcher;

pub use engine::{MazeEngine, MazeEvent};
pub use grid::Grid;
pub use path::find_path;
pub use snapshot::MazeSnapshot;
pub use stage::{Stage, StageSet, StageSpec};
pub use watcher::{facing_each_other, Player, Watcher};
