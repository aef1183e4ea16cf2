//! Stage module - static per-stage configuration
//!
//! Stages are supplied as JSON (see `stages.json` for the built-in set) and
//! validated once at load time. The engine only ever indexes into a loaded
//! [`StageSet`].

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::types::Position;

const BUILTIN_STAGES: &str = include_str!("stages.json");

/// Stage as written in stage data files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSpec {
    pub maze: Vec<Vec<u8>>,
    #[serde(alias = "playerStart")]
    pub player_start: Position,
    #[serde(alias = "watcherStarts", default)]
    pub watcher_starts: Vec<Position>,
}

/// Validated stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub grid: Grid,
    pub player_start: Position,
    pub watcher_starts: Vec<Position>,
}

impl Stage {
    pub fn from_spec(spec: &StageSpec) -> Result<Self> {
        let grid = Grid::from_rows(&spec.maze)?;

        if grid.is_wall(spec.player_start) {
            bail!(
                "player start {:?} is a wall or outside the maze",
                spec.player_start
            );
        }
        for (i, start) in spec.watcher_starts.iter().enumerate() {
            if grid.is_wall(*start) {
                bail!("watcher {} start {:?} is a wall or outside the maze", i, start);
            }
        }

        Ok(Self {
            grid,
            player_start: spec.player_start,
            watcher_starts: spec.watcher_starts.clone(),
        })
    }
}

/// Ordered, non-empty sequence of stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSet {
    stages: Vec<Stage>,
}

impl StageSet {
    pub fn new(stages: Vec<Stage>) -> Result<Self> {
        if stages.is_empty() {
            bail!("stage set is empty");
        }
        Ok(Self { stages })
    }

    /// Parse and validate a JSON array of stages
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<StageSpec> =
            serde_json::from_str(json).context("stage data is not a valid stage list")?;
        let stages = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Stage::from_spec(spec).with_context(|| format!("stage {}", i)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(stages)
    }

    /// The stages shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_STAGES).context("built-in stages")
    }

    /// Single-stage set, handy for tests and custom layouts
    pub fn single(stage: Stage) -> Self {
        Self {
            stages: vec![stage],
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Stage 0. A set always holds at least one stage.
    pub fn first(&self) -> &Stage {
        &self.stages[0]
    }

    pub fn is_final(&self, index: usize) -> bool {
        index + 1 >= self.stages.len()
    }
}
