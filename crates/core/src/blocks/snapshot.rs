use serde::Serialize;

use super::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardRows = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Falling piece as a renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Display color of `kind`
    pub color: &'static str,
    pub x: i8,
    pub y: i8,
    /// Shape rows as 0/1 flags, anchored at (x, y)
    pub shape: Vec<Vec<u8>>,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.kind.color(),
            x: value.x,
            y: value.y,
            shape: value.shape.to_rows(),
        }
    }
}

/// Read-only projection of the block game for renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSnapshot {
    /// Locked cells, top row first
    pub board: BoardRows,
    pub current: Option<ActiveSnapshot>,
    /// Landing row of the current piece
    pub ghost_y: Option<i8>,
    pub held: Option<PieceKind>,
    pub next: Vec<PieceKind>,
    pub can_hold: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub show_bonus: bool,
}

impl BlockSnapshot {
    pub fn empty_board() -> BoardRows {
        [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]
    }

    /// Number of locked cells
    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|c| c.is_some()).count()
    }
}
