//! Terminal input mapping (engine-facing).
//!
//! Maps `crossterm` key events into [`types::MazeAction`] and
//! [`types::BlockAction`]. Independent of any rendering layer.

pub mod map;

pub use grid_games_types as types;

pub use map::{block_action, maze_action, should_quit};
