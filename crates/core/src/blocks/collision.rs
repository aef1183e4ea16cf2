//! Piece-vs-board overlap testing
//!
//! The top edge is never checked: pieces may sit partly above row 0 after a
//! spawn or rotation.

use super::board::Board;
use super::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// True if `piece` translated by `(dx, dy)` leaves the side walls, reaches
/// the floor, or overlaps a locked cell.
pub fn collides(piece: &Piece, board: &Board, (dx, dy): (i8, i8)) -> bool {
    piece.cells().any(|(x, y)| {
        let (x, y) = (x + dx, y + dy);
        x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 || board.is_occupied(x, y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_free_spawn_does_not_collide() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::T);
        assert!(!collides(&piece, &board, (0, 0)));
        assert!(!collides(&piece, &board, (0, 1)));
    }

    #[test]
    fn test_side_walls() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::I);
        assert!(!collides(&piece, &board, (-3, 0)));
        assert!(collides(&piece, &board, (-4, 0)));
        assert!(!collides(&piece, &board, (3, 0)));
        assert!(collides(&piece, &board, (4, 0)));
    }

    #[test]
    fn test_floor() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O).moved(0, 18);
        assert!(!collides(&piece, &board, (0, 0)));
        assert!(collides(&piece, &board, (0, 1)));
    }

    #[test]
    fn test_top_is_unchecked() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::I).rotated();
        assert!(!collides(&piece, &board, (0, -3)));
        assert!(!collides(&piece, &board, (0, -10)));
    }

    #[test]
    fn test_overlap_with_locked_cell() {
        let mut board = Board::new();
        board.set(4, 2, Some(PieceKind::Z));
        let piece = Piece::spawn(PieceKind::O);
        assert!(!collides(&piece, &board, (0, 0)));
        assert!(collides(&piece, &board, (0, 1)));
    }
}
