//! Grid games (workspace facade crate).
//!
//! Re-exports the member crates as `grid_games::{core, engine, input, types}`.
//! The implementation lives in dedicated crates under `crates/`.

pub use grid_games_core as core;
pub use grid_games_engine as engine;
pub use grid_games_input as input;
pub use grid_games_types as types;

/// Load configuration from the environment and build both games.
///
/// The block game comes back already started.
pub fn from_env() -> anyhow::Result<(core::MazeEngine, core::BlockEngine)> {
    let config = engine::GameConfig::from_env();
    Ok((config.maze_engine()?, config.block_engine()))
}
