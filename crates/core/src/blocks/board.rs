//! Board module - the 10x20 stacking well
//!
//! Cells are stored in a flat row-major array: empty (`None`) or the kind of
//! the piece that was locked there, which doubles as the color tag.
//! Coordinates: x grows left to right (0..10), y grows top to bottom (0..20).
//! The board is only mutated by locking a piece and by line-clear compaction.

use arrayvec::ArrayVec;

use super::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by a single compaction pass
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some(y as usize * WIDTH + x as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(Option::is_some)
    }

    /// Stamp every filled cell of `piece` with its kind.
    ///
    /// Cells above the top edge are dropped; the piece was already checked
    /// against the board by the caller.
    pub fn lock_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Remove all full rows, compact the rest downward and refill the top
    /// with empty rows. Returns the cleared row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                }
            }
        }

        for cell in &mut self.cells[..write_y * WIDTH] {
            *cell = None;
        }

        cleared
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(WIDTH).map(<[Cell]>::to_vec).collect()
    }

    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) != gap {
                board.set(x, y, Some(PieceKind::O));
            }
        }
    }

    #[test]
    fn test_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::new();
        assert!(board.set(5, 10, Some(PieceKind::T)));
        assert!(!board.set(5, 20, Some(PieceKind::T)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(0, -1), None);
        assert!(board.is_occupied(5, 10));
        assert!(!board.is_occupied(5, 11));
    }

    #[test]
    fn test_lock_piece_stamps_kind() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::T).moved(0, 18);
        board.lock_piece(&piece);
        assert_eq!(board.get(4, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(5, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(6, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(5, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    fn test_lock_piece_ignores_rows_above_top() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::I).rotated().moved(0, -2);
        board.lock_piece(&piece);
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear_single_row_shifts_down() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        board.set(3, 18, Some(PieceKind::L));
        board.set(7, 0, Some(PieceKind::S));

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::L)));
        assert_eq!(board.get(7, 1), Some(Some(PieceKind::S)));
        assert!(board.rows()[0].iter().all(Option::is_none));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19, None);
        fill_row(&mut board, 18, Some(0));
        fill_row(&mut board, 17, None);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert!(!board.is_occupied(0, 19));
        assert!(board.is_occupied(1, 19));
        assert!(board.rows()[18].iter().all(Option::is_none));
    }

    #[test]
    fn test_clear_nothing_when_no_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19, Some(4));
        let before = board.clone();
        assert!(board.clear_full_rows().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_resets_board() {
        let mut board = Board::new();
        fill_row(&mut board, 10, None);
        board.clear();
        assert_eq!(board, Board::new());
    }
}
