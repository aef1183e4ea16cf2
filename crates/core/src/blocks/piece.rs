//! Pieces module - tetromino shape matrices and the falling piece value
//!
//! Shapes are small binary matrices. Rotation is a pure 90° clockwise
//! transform (transpose, then reverse each new row) that returns a new shape.
//! There is no kick table: a rotation either fits where it is or is refused.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any tetromino matrix
const MAX_SIDE: usize = 4;

/// Offset of a single filled cell from the piece anchor
pub type MinoOffset = (i8, i8);

/// Binary shape matrix, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let mut out = [[false; MAX_SIDE]; MAX_SIDE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                out[y][x] = v != 0;
            }
        }
        Self {
            width: rows.first().map(|r| r.len()).unwrap_or(0) as u8,
            height: rows.len() as u8,
            rows: out,
        }
    }

    /// Spawn orientation for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            PieceKind::L => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// 90° clockwise rotation as a new shape
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, row) in rows.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }

    /// Offsets of the filled cells, row by row
    pub fn filled(&self) -> ArrayVec<MinoOffset, { MAX_SIDE * MAX_SIDE }> {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rows as 0/1 vectors, for rendering previews
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.rows[y][x]))
                    .collect()
            })
            .collect()
    }
}

/// A tetromino placed on the board: shape plus top-left anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece in spawn orientation, horizontally centered on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self::centered(kind, Shape::of(kind))
    }

    fn centered(kind: PieceKind, shape: Shape) -> Self {
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Same shape, moved back to the spawn anchor
    pub fn recentered(&self) -> Self {
        Self::centered(self.kind, self.shape)
    }

    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Clockwise rotation about the same anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width / 2) as i8
}
