//! Grid module - the static maze layout of one stage
//!
//! Cells are stored in a flat row-major vector. The goal cell is located once
//! at construction and kept alongside the cells, so distance queries never
//! rescan the grid.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::types::{CellKind, Position};

/// Rectangular maze grid with exactly one goal cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<CellKind>,
    goal: Position,
}

impl Grid {
    /// Build a grid from rows of cell codes (0=floor, 1=wall, 2=goal).
    ///
    /// Fails on an empty or ragged grid, unknown codes, or a goal count other than one.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            bail!("maze grid is empty");
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                bail!(
                    "maze row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                );
            }
            for (x, &code) in row.iter().enumerate() {
                let Some(kind) = CellKind::from_code(code) else {
                    bail!("unknown cell code {} at ({}, {})", code, x, y);
                };
                if kind == CellKind::Goal {
                    if let Some(prev) = goal {
                        bail!("second goal at ({}, {}), first at {:?}", x, y, prev);
                    }
                    goal = Some(Position::new(x as i32, y as i32));
                }
                cells.push(kind);
            }
        }

        let Some(goal) = goal else {
            bail!("maze has no goal cell");
        };

        Ok(Self {
            width,
            height,
            cells,
            goal,
        })
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.width + pos.x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Cell at `pos`, `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Out-of-bounds counts as wall
    pub fn is_wall(&self, pos: Position) -> bool {
        !matches!(self.get(pos), Some(CellKind::Floor | CellKind::Goal))
    }

    pub fn is_passable(&self, pos: Position) -> bool {
        !self.is_wall(pos)
    }

    pub fn is_goal(&self, pos: Position) -> bool {
        pos == self.goal
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Manhattan distance from `pos` to the goal
    pub fn distance_to_goal(&self, pos: Position) -> u32 {
        pos.manhattan(self.goal)
    }

    /// Row-major cell slice
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Dense index of `pos`, for per-cell scratch buffers sized `width * height`
    pub(crate) fn cell_index(&self, pos: Position) -> Option<usize> {
        self.index(pos)
    }

    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Rows of numeric cell codes, the same layout `from_rows` accepts
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}
