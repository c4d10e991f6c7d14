//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree at a given depth.
//! Finished games are leaves: nothing is expanded past a win or stalemate.

use super::legal_moves;
use crate::rules::{PawnsOnly, RuleSet};
use crate::Position;

/// Counts the leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mover = position.side_to_move();
    let moves = legal_moves(position.board(), mover);

    let mut nodes = 0u64;
    for m in &moves {
        let next = position.with_move(*m);
        if depth == 1 || PawnsOnly.game_result(next.board(), mover).is_some() {
            nodes += 1;
        } else {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Perft with divide: the node count below each root move.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mover = position.side_to_move();
    let moves = legal_moves(position.board(), mover);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|m| {
            let next = position.with_move(*m);
            let finished = PawnsOnly.game_result(next.board(), mover).is_some();
            let nodes = if depth > 1 && !finished {
                perft(&next, depth - 1)
            } else {
                1
            };
            (m.mv().to_string(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Position::startpos(), 1), 16);
    }

    #[test]
    fn perft_startpos_depth_2() {
        // No contact is possible after one move each.
        assert_eq!(perft(&Position::startpos(), 2), 256);
    }

    #[test]
    fn perft_stops_at_finished_games() {
        // h7h8 wins outright; h7 has no other move and a5 is Black's only pawn.
        let position = Position::from_fen("8/7P/8/p7/8/8/8/8 w").unwrap();
        assert_eq!(perft(&position, 1), 1);
        assert_eq!(perft(&position, 3), 1);
    }

    #[test]
    fn divide_sums_to_perft() {
        let position = Position::startpos();
        let divide = perft_divide(&position, 2);
        assert_eq!(divide.len(), 16);
        assert_eq!(divide[0], ("a2a3".to_string(), 16));
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&position, 2));
    }
}
