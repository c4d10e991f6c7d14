//! Board plus turn state.

use crate::rules::{LegalMove, PawnsOnly, Rejection, RuleSet};
use crate::Board;
use pawns_core::{Color, Fen, FenError, Move};

/// The complete rules state between two plies: the board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Creates the starting position, White to move.
    pub fn startpos() -> Self {
        Position {
            board: PawnsOnly.initial_board(),
            side_to_move: Color::White,
        }
    }

    /// Creates a position from a pawns-only FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        Ok(Position {
            board: Board::from_fen(&parsed),
            side_to_move: parsed.active_color,
        })
    }

    /// Converts the position to a pawns-only FEN string.
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.side_to_move)
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Validates `mv` for the side to move.
    pub fn validate(&self, mv: Move) -> Result<LegalMove, Rejection> {
        PawnsOnly.validate(&self.board, self.side_to_move, mv)
    }

    /// Applies a validated move, hands the turn over, and expires the new
    /// mover's en passant flags.
    ///
    /// `legal` must have come from [`validate`](Self::validate) on this
    /// position.
    pub fn make_move(&mut self, legal: LegalMove) {
        PawnsOnly.apply(&mut self.board, self.side_to_move, legal);
        self.side_to_move = self.side_to_move.opposite();
        self.board.clear_en_passant(self.side_to_move);
    }

    /// Returns a copy of the position with `legal` applied.
    pub fn with_move(&self, legal: LegalMove) -> Self {
        let mut next = self.clone();
        next.make_move(legal);
        next
    }
}
