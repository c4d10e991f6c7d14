//! Legal move generation.
//!
//! Candidates are produced from pawn geometry and filtered through the
//! validator, so generation can never disagree with move checking.

pub mod perft;

use crate::rules::{validate, LegalMove};
use crate::Board;
use pawns_core::{Color, Move};

/// A list of legal moves.
///
/// Eight pawns with at most four moves each bound the length at 32.
#[derive(Clone, Default)]
pub struct MoveList {
    moves: Vec<LegalMove>,
}

impl MoveList {
    /// Maximum number of legal moves in any pawns-only position.
    pub const MAX_MOVES: usize = 32;

    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(Self::MAX_MOVES),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: LegalMove) {
        debug_assert!(self.moves.len() < Self::MAX_MOVES);
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[LegalMove] {
        &self.moves
    }

    /// Returns true if the plain move is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.iter().any(|m| m.mv() == mv)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = LegalMove;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a LegalMove;
    type IntoIter = std::slice::Iter<'a, LegalMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.moves.iter().map(|m| m.mv())).finish()
    }
}

/// Generates every legal move for `color` on `board`.
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let dir = color.pawn_direction();
    let mut moves = MoveList::new();
    for from in board.pawns(color) {
        let targets = [(0, dir), (0, 2 * dir), (-1, dir), (1, dir)];
        for (file_delta, rank_delta) in targets {
            let Some(to) = from.offset(file_delta, rank_delta) else {
                continue;
            };
            if let Ok(legal) = validate(board, color, Move::new(from, to)) {
                moves.push(legal);
            }
        }
    }
    moves
}
