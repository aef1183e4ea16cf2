use serde::Serialize;

use super::watcher::{Player, Watcher};
use crate::types::{GameStatus, Position};

/// Read-only projection of the maze state for renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeSnapshot {
    pub width: usize,
    pub height: usize,
    /// Rows of cell codes (0=floor, 1=wall, 2=goal)
    pub cells: Vec<Vec<u8>>,
    pub goal: Position,
    pub player: Player,
    pub watchers: Vec<Watcher>,
    pub mines: Vec<Position>,
    pub status: GameStatus,
    pub score: u32,
    pub stage: usize,
    pub stage_count: usize,
    pub tick: u64,
}
