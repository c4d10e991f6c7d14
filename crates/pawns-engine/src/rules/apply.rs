//! Applying validated moves to the board.

use super::{LegalMove, MoveClass};
use crate::Board;
use pawns_core::{Cell, Color};

/// Applies a validated move for `color`.
///
/// Turn ownership and the clearing of the next mover's en passant set are
/// handled by [`Position`](crate::Position), not here.
pub fn apply(board: &mut Board, color: Color, legal: LegalMove) {
    match legal.class() {
        MoveClass::Advance | MoveClass::DoubleStep => apply_advance(board, color, legal),
        MoveClass::Capture | MoveClass::EnPassant => apply_capture(board, color, legal),
    }
}

fn apply_advance(board: &mut Board, color: Color, legal: LegalMove) {
    let mv = legal.mv();
    board.clear_cell(mv.from());
    board.set_cell(mv.to(), Cell::Pawn(color));
    if legal.class() == MoveClass::DoubleStep {
        board.mark_en_passant(color, mv.from().file());
    }
}

fn apply_capture(board: &mut Board, color: Color, legal: LegalMove) {
    let mv = legal.mv();
    board.clear_cell(mv.from());
    board.set_cell(mv.to(), Cell::Pawn(color));
    // The pawn taken en passant sits behind the destination, not on it.
    if legal.class() == MoveClass::EnPassant {
        if let Some(taken) = mv.to().offset(0, -color.pawn_direction()) {
            if board.cell(taken) == Cell::Pawn(color.opposite()) {
                board.clear_cell(taken);
            }
        }
    }
}
