//! Runtime configuration
//!
//! Read from environment variables, each falling back to its default when
//! unset or unparsable:
//!
//! - `GRID_GAMES_SEED`: seed for the deterministic RNG (default 1)
//! - `GRID_GAMES_MAZE_TICK_MS`: maze tick period (default 500)
//! - `GRID_GAMES_NEXT_QUEUE`: block lookahead length, at least 2 (default 2)
//! - `GRID_GAMES_STAGES_PATH`: JSON stage file; built-in stages when unset

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use grid_games_core::maze::{MazeEngine, StageSet};
use grid_games_core::types::{MAZE_TICK_MS, MIN_NEXT_PIECES};
use grid_games_core::{BlockEngine, SimpleRng};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub maze_tick: Duration,
    pub next_queue_len: usize,
    pub stages_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            maze_tick: Duration::from_millis(u64::from(MAZE_TICK_MS)),
            next_queue_len: MIN_NEXT_PIECES,
            stages_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("GRID_GAMES_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let maze_tick = lookup("GRID_GAMES_MAZE_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.maze_tick);

        let next_queue_len = lookup("GRID_GAMES_NEXT_QUEUE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.next_queue_len)
            .max(MIN_NEXT_PIECES);

        let stages_path = lookup("GRID_GAMES_STAGES_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            maze_tick,
            next_queue_len,
            stages_path,
        }
    }

    /// Stage file when configured, built-in stages otherwise
    pub fn load_stages(&self) -> Result<StageSet> {
        match &self.stages_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read stage file {}", path.display()))?;
                let stages = StageSet::from_json(&json)
                    .with_context(|| format!("invalid stage file {}", path.display()))?;
                debug!(path = %path.display(), stages = stages.len(), "stages loaded");
                Ok(stages)
            }
            None => StageSet::builtin(),
        }
    }

    pub fn maze_engine(&self) -> Result<MazeEngine> {
        let mut engine = MazeEngine::with_seed(self.load_stages()?, self.seed);
        engine.set_tick_interval(self.maze_tick);
        Ok(engine)
    }

    /// Seeded block game with its first piece already spawned
    pub fn block_engine(&self) -> BlockEngine {
        let mut engine =
            BlockEngine::with_queue_len(SimpleRng::new(self.seed), self.next_queue_len);
        engine.start();
        engine
    }
}
