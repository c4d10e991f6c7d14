//! Move legality.
//!
//! Checks run in a fixed order and the first failure wins: origin
//! occupancy, then the advance or capture rules depending on whether the
//! move stays on its file. Only the touched cells and the opponent's en
//! passant set are read.

use super::{LegalMove, MoveClass, Rejection};
use crate::Board;
use pawns_core::{Cell, Color, Move, MoveKind};

/// Parses move text and validates it for `color`.
pub fn validate_text(board: &Board, color: Color, text: &str) -> Result<LegalMove, Rejection> {
    let mv = Move::parse(text)?;
    validate(board, color, mv)
}

/// Decides whether `color` may play `mv` on `board`.
pub fn validate(board: &Board, color: Color, mv: Move) -> Result<LegalMove, Rejection> {
    if !board.cell(mv.from()).is_pawn_of(color) {
        return Err(Rejection::NoPawnAtOrigin {
            color,
            square: mv.from(),
        });
    }

    let class = match mv.kind() {
        MoveKind::Advance => advance_class(board, color, mv),
        MoveKind::Capture => capture_class(board, color, mv),
    };

    class
        .map(|class| LegalMove::new(mv, class))
        .ok_or(Rejection::Illegal(mv))
}

fn advance_class(board: &Board, color: Color, mv: Move) -> Option<MoveClass> {
    if !board.cell(mv.to()).is_empty() {
        return None;
    }

    let dir = color.pawn_direction();
    let delta = mv.rank_delta();
    if delta == dir {
        return Some(MoveClass::Advance);
    }

    if delta == 2 * dir && mv.from().rank() == color.home_rank() {
        let skipped = mv.from().offset(0, dir)?;
        if board.cell(skipped).is_empty() {
            return Some(MoveClass::DoubleStep);
        }
    }

    None
}

fn capture_class(board: &Board, color: Color, mv: Move) -> Option<MoveClass> {
    if mv.file_distance() != 1 || mv.rank_delta() != color.pawn_direction() {
        return None;
    }

    let opponent = color.opposite();
    match board.cell(mv.to()) {
        Cell::Pawn(c) if c == opponent => Some(MoveClass::Capture),
        Cell::Empty
            if mv.from().rank() == color.en_passant_capture_rank()
                && board.en_passant(opponent).contains(mv.to().file()) =>
        {
            Some(MoveClass::EnPassant)
        }
        _ => None,
    }
}
