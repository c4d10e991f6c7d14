//! Game-end detection, run once after every applied move.

use super::{validate, GameResult, WinReason};
use crate::Board;
use pawns_core::{Color, Move};

/// Decides whether the game is over after `mover` has moved.
///
/// Checked in order: a `mover` pawn on its far rank, an opponent with no
/// pawns, an opponent with no legal move.
pub fn evaluate(board: &Board, mover: Color) -> Option<GameResult> {
    if board.has_pawn_on_rank(mover, mover.far_rank()) {
        return Some(GameResult::Win {
            color: mover,
            reason: WinReason::FarRank,
        });
    }

    let opponent = mover.opposite();
    if board.pawn_count(opponent) == 0 {
        return Some(GameResult::Win {
            color: mover,
            reason: WinReason::Annihilation,
        });
    }

    if !has_legal_move(board, opponent) {
        return Some(GameResult::Stalemate);
    }

    None
}

/// Returns true if any pawn of `color` has a legal one-step advance or
/// diagonal capture.
///
/// A legal two-square advance implies a legal one-square advance, so the
/// double step never needs checking here.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let dir = color.pawn_direction();
    board.pawns(color).any(|from| {
        [0, -1, 1]
            .into_iter()
            .filter_map(|file_delta| from.offset(file_delta, dir))
            .any(|to| validate(board, color, Move::new(from, to)).is_ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawns_core::Fen;

    fn board(fen: &str) -> Board {
        Board::from_fen(&Fen::parse(fen).unwrap())
    }

    #[test]
    fn game_continues_from_start() {
        let b = Board::startpos();
        assert_eq!(evaluate(&b, Color::White), None);
        assert_eq!(evaluate(&b, Color::Black), None);
    }

    #[test]
    fn far_rank_wins() {
        let b = board("7P/p7/8/8/8/8/8/8 b");
        assert_eq!(
            evaluate(&b, Color::White),
            Some(GameResult::Win {
                color: Color::White,
                reason: WinReason::FarRank
            })
        );

        let b = board("8/8/8/8/8/8/7P/p7 w");
        assert_eq!(
            evaluate(&b, Color::Black),
            Some(GameResult::Win {
                color: Color::Black,
                reason: WinReason::FarRank
            })
        );
    }

    #[test]
    fn far_rank_beats_annihilation() {
        let b = board("7P/8/8/8/8/8/8/8 b");
        assert_eq!(
            evaluate(&b, Color::White),
            Some(GameResult::Win {
                color: Color::White,
                reason: WinReason::FarRank
            })
        );
    }

    #[test]
    fn annihilation_wins() {
        let b = board("8/8/8/3P4/8/8/8/8 b");
        assert_eq!(
            evaluate(&b, Color::White),
            Some(GameResult::Win {
                color: Color::White,
                reason: WinReason::Annihilation
            })
        );
    }

    #[test]
    fn blocked_opponent_is_stalemate() {
        // Black on a5 faces White on a4, nothing to capture.
        let b = board("8/8/8/p7/P7/8/8/8 b");
        assert!(!has_legal_move(&b, Color::Black));
        assert!(!has_legal_move(&b, Color::White));
        assert_eq!(evaluate(&b, Color::White), Some(GameResult::Stalemate));
    }

    #[test]
    fn capture_avoids_stalemate() {
        // Both files blocked, but Black on b5 can take a4.
        let b = board("8/8/8/pp6/Pp6/1P6/8/8 b");
        assert!(has_legal_move(&b, Color::Black));
        assert_eq!(evaluate(&b, Color::White), None);
    }

    #[test]
    fn en_passant_avoids_stalemate() {
        // Black d4 is blocked by d3 but may take e4 en passant.
        let b = board("8/8/8/8/3pP3/3P4/8/8 b e3");
        assert!(has_legal_move(&b, Color::Black));
        assert_eq!(evaluate(&b, Color::White), None);

        let b = board("8/8/8/8/3pP3/3P4/8/8 b");
        assert!(!has_legal_move(&b, Color::Black));
        assert_eq!(evaluate(&b, Color::White), Some(GameResult::Stalemate));
    }
}
