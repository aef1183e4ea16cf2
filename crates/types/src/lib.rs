//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by both game cores.
//! All types are plain data with no game logic, so they can be used by the
//! simulation cores, the tick drivers, and any renderer or input adapter.
//!
//! # Coordinates
//!
//! Both games use screen coordinates: `x` grows to the right, `y` grows downward.
//! Row 0 is the top row.
//!
//! # Maze Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAZE_TICK_MS` | 500 | Watcher movement period |
//! | `CLOSER_POINTS` | 10 | Move that strictly reduces distance to the goal |
//! | `AWAY_PENALTY` | 5 | Move that strictly increases distance to the goal |
//! | `NEUTRALIZE_POINTS` | 50 | Watcher destroyed by a mine |
//!
//! # Block Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity period at level 1 |
//! | `DROP_STEP_MS` | 50 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Gravity period floor |
//! | `LINE_POINTS` | 100 | Per cleared line, times level |
//! | `FOUR_LINE_BONUS` | 1000 | Extra for a 4-line clear, times level |
//! | `LEVEL_SCORE_STEP` | 1000 | Level goes up once score exceeds `level * step` |
//! | `BONUS_DISPLAY_MS` | 2000 | Lifetime of the 4-line bonus flag |
//!
//! # Examples
//!
//! ```
//! use grid_games_types::{Direction, Position, BOARD_WIDTH};
//!
//! let dir = Direction::from_delta(1, 0).unwrap();
//! assert_eq!(dir, Direction::Right);
//! assert_eq!(dir.reverse(), Direction::Left);
//!
//! let p = Position::new(2, 3).step(Direction::Up);
//! assert_eq!(p, Position::new(2, 2));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Block board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Block board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Maze tick period (milliseconds)
pub const MAZE_TICK_MS: u32 = 500;

/// Score for a move that brings the player strictly closer to the goal
pub const CLOSER_POINTS: u32 = 10;

/// Penalty for a move that takes the player strictly further from the goal
pub const AWAY_PENALTY: u32 = 5;

/// Score for each watcher neutralized by a mine
pub const NEUTRALIZE_POINTS: u32 = 50;

/// Gravity period at level 1 (milliseconds)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity period reduction per level (milliseconds)
pub const DROP_STEP_MS: u32 = 50;

/// Gravity period never drops below this (milliseconds)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points per cleared line (multiplied by level)
pub const LINE_POINTS: u32 = 100;

/// Extra points for clearing four lines at once (multiplied by level)
pub const FOUR_LINE_BONUS: u32 = 1000;

/// Score step between levels
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// How long the four-line bonus flag stays raised (milliseconds)
pub const BONUS_DISPLAY_MS: u32 = 2000;

/// Minimum number of upcoming pieces kept in the preview queue
pub const MIN_NEXT_PIECES: usize = 2;

/// Facing direction of a maze agent. Serialized in lowercase (`"up"`, `"right"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in neighbor expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step `(dx, dy)` for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Direction for a unit vector. Anything else yields `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighboring cell one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Maze cell vocabulary. Numeric codes: 0=floor, 1=wall, 2=goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Floor,
    Wall,
    Goal,
}

impl CellKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellKind::Floor),
            1 => Some(CellKind::Wall),
            2 => Some(CellKind::Goal),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            CellKind::Floor => 0,
            CellKind::Wall => 1,
            CellKind::Goal => 2,
        }
    }
}

/// Maze session status. Anything but `Playing` is terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    GameOver,
    Clear,
}

/// Watcher behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatcherMode {
    #[default]
    Searching,
    Chasing,
}

/// Tetromino piece kinds, in canonical table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Display color tag. Locked cells keep the kind, so this is also the board color.
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "cyan",
            PieceKind::O => "yellow",
            PieceKind::T => "purple",
            PieceKind::L => "orange",
            PieceKind::J => "blue",
            PieceKind::Z => "green",
            PieceKind::S => "red",
        }
    }
}

/// Block board cell (None = empty, Some = locked piece color)
pub type Cell = Option<PieceKind>;

/// Maze commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeAction {
    Move(Direction),
    PlaceMine,
    Restart,
}

/// Block game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Hold,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_wire_names() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        let dir: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn from_delta_rejects_non_unit_vectors() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
        }
    }

    #[test]
    fn reverse_is_opposite() {
        for dir in Direction::ALL {
            assert_eq!(dir.reverse().reverse(), dir);
            assert_ne!(dir.reverse(), dir);
            let ((dx, dy), (rx, ry)) = (dir.delta(), dir.reverse().delta());
            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Position::new(0, 0).manhattan(Position::new(3, -4)), 7);
        assert_eq!(Position::new(2, 2).manhattan(Position::new(2, 2)), 0);
    }

    #[test]
    fn cell_codes() {
        assert_eq!(CellKind::from_code(0), Some(CellKind::Floor));
        assert_eq!(CellKind::from_code(1), Some(CellKind::Wall));
        assert_eq!(CellKind::from_code(2), Some(CellKind::Goal));
        assert_eq!(CellKind::from_code(3), None);
        assert_eq!(CellKind::Goal.code(), 2);
    }

    #[test]
    fn piece_colors_are_distinct() {
        let mut colors: Vec<&str> = PieceKind::ALL.iter().map(PieceKind::color).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), PieceKind::ALL.len());
        assert_eq!(PieceKind::I.color(), "cyan");
    }
}
