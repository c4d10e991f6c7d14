//! Pawns-only chess rules.

use super::{apply, evaluate, validate, GameResult, LegalMove, Rejection, RuleSet};
use crate::Board;
use pawns_core::{Color, Move};

/// Pawns-only chess.
///
/// - Each side starts with eight pawns on its second rank
/// - One-square advance, two-square advance from the home rank
/// - Diagonal capture, including en passant
/// - A pawn on the far rank or a wiped-out opponent wins
/// - A side to move with no legal move is stalemated
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnsOnly;

impl RuleSet for PawnsOnly {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn validate(&self, board: &Board, color: Color, mv: Move) -> Result<LegalMove, Rejection> {
        validate(board, color, mv)
    }

    fn apply(&self, board: &mut Board, color: Color, legal: LegalMove) {
        apply(board, color, legal)
    }

    fn game_result(&self, board: &Board, mover: Color) -> Option<GameResult> {
        evaluate(board, mover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawns_core::Fen;

    #[test]
    fn initial_board() {
        let board = PawnsOnly.initial_board();
        assert_eq!(board.to_fen(Color::White), Fen::STARTPOS);
    }

    #[test]
    fn try_apply_leaves_board_alone_on_rejection() {
        let mut board = PawnsOnly.initial_board();
        let before = board.clone();
        let mv = Move::parse("e2e5").unwrap();
        assert!(PawnsOnly.try_apply(&mut board, Color::White, mv).is_err());
        assert_eq!(board, before);

        let mv = Move::parse("e7e5").unwrap();
        assert!(PawnsOnly.try_apply(&mut board, Color::White, mv).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn try_apply_applies_legal_move() {
        let mut board = PawnsOnly.initial_board();
        let mv = Move::parse("e2e4").unwrap();
        let legal = PawnsOnly.try_apply(&mut board, Color::White, mv).unwrap();
        assert_eq!(legal.mv(), mv);
        assert_eq!(
            board.to_fen(Color::Black),
            "8/pppppppp/8/8/4P3/8/PPPP1PPP/8 b e3"
        );
    }
}
