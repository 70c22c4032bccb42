//! Per-piece movement and attack legality.
//!
//! Each piece kind answers two pure predicates against a read-only board:
//! whether it may step onto an empty target square ([`can_move`]) and
//! whether it may capture on an occupied one ([`can_attack`]). A third
//! predicate, [`threatens`], gives the raw attack geometry used for
//! under-attack detection.

use crate::Board;
use board_core::{Piece, PieceKind, Square};

/// Knight offsets as (row delta, col delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Returns true if `piece`, standing on `from`, may legally step onto the
/// empty square `to`.
pub(crate) fn can_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawn_move(board, piece, from, to),
        PieceKind::Knight => knight_reaches(from, to) && !same_color_at(board, piece, to),
        PieceKind::Bishop => diagonal_line(board, from, to) && !same_color_at(board, piece, to),
        PieceKind::Rook => straight_line(board, from, to),
        PieceKind::Queen => queen_line(board, from, to) && !same_color_at(board, piece, to),
        PieceKind::King => king_move(board, piece, from, to),
    }
}

/// Returns true if `piece`, standing on `from`, may legally capture on the
/// occupied square `to`.
///
/// Only the pawn attacks differently from how it moves; for the sliders a
/// capture resolves to the same line test as a step, which already stops
/// the slide at the first occupied square.
pub(crate) fn can_attack(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawn_capture_reaches(piece, from, to),
        PieceKind::Knight => knight_reaches(from, to) && !same_color_at(board, piece, to),
        PieceKind::Bishop => diagonal_line(board, from, to) && !same_color_at(board, piece, to),
        PieceKind::Rook => straight_line(board, from, to),
        PieceKind::Queen => queen_line(board, from, to) && !same_color_at(board, piece, to),
        PieceKind::King => king_move(board, piece, from, to),
    }
}

/// Returns true if `piece`, standing on `from`, covers the square `to`.
///
/// This is attack geometry only: path blocking applies, but neither the
/// occupant of `to` nor king safety is consulted. A king covers its eight
/// neighbors unconditionally.
pub(crate) fn threatens(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawn_capture_reaches(piece, from, to),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => diagonal_line(board, from, to),
        PieceKind::Rook => straight_line(board, from, to),
        PieceKind::Queen => queen_line(board, from, to),
        PieceKind::King => king_reaches(from, to),
    }
}

/// A pawn steps straight ahead: one square always, two from its start row
/// when the intermediate square is empty. The target's own emptiness is
/// the caller's precondition.
fn pawn_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from.col() != to.col() {
        return false;
    }
    let dir = piece.color().pawn_direction();
    let Some(step) = from.offset(dir, 0) else {
        return false;
    };
    if step == to {
        return true;
    }
    from.row() == piece.color().pawn_start_row()
        && board.piece_at(step).is_none()
        && step.offset(dir, 0) == Some(to)
}

/// A pawn captures one square diagonally ahead.
fn pawn_capture_reaches(piece: Piece, from: Square, to: Square) -> bool {
    let dir = piece.color().pawn_direction();
    from.offset(dir, 1) == Some(to) || from.offset(dir, -1) == Some(to)
}

fn knight_reaches(from: Square, to: Square) -> bool {
    KNIGHT_OFFSETS
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == Some(to))
}

/// One step in any of the eight directions, excluding the null move.
fn king_reaches(from: Square, to: Square) -> bool {
    let d_row = (from.row() as i8 - to.row() as i8).abs();
    let d_col = (from.col() as i8 - to.col() as i8).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// The king may not step onto a square covered by the opponent; this is
/// the only place check avoidance is enforced.
fn king_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    king_reaches(from, to)
        && !same_color_at(board, piece, to)
        && !board.is_under_attack(to, piece.color().opponent())
}

/// Exactly one axis differs, and the squares strictly between are empty.
fn straight_line(board: &Board, from: Square, to: Square) -> bool {
    (from.row() == to.row()) != (from.col() == to.col()) && path_clear(board, from, to)
}

/// Equal row and column distance, and the squares strictly between are empty.
fn diagonal_line(board: &Board, from: Square, to: Square) -> bool {
    let d_row = from.row() as i8 - to.row() as i8;
    let d_col = from.col() as i8 - to.col() as i8;
    d_row != 0 && d_row.abs() == d_col.abs() && path_clear(board, from, to)
}

fn queen_line(board: &Board, from: Square, to: Square) -> bool {
    straight_line(board, from, to) || diagonal_line(board, from, to)
}

fn same_color_at(board: &Board, piece: Piece, square: Square) -> bool {
    board
        .piece_at(square)
        .is_some_and(|occupant| occupant.color() == piece.color())
}

/// Walks from `from` towards `to` one step at a time, requiring every
/// square strictly between them to be empty. The caller guarantees the two
/// squares share a row, column, or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).signum();
    let d_col = (to.col() as i8 - from.col() as i8).signum();
    let mut square = from;
    loop {
        square = match square.offset(d_row, d_col) {
            Some(next) => next,
            None => return false,
        };
        if square == to {
            return true;
        }
        if board.piece_at(square).is_some() {
            return false;
        }
    }
}
