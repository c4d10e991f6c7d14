//! Rule set abstraction and the pawns-only rules.
//!
//! Legality checking, move application, and game-end detection each live in
//! their own module; [`PawnsOnly`] ties them together behind the
//! [`RuleSet`] trait so the rest of the engine never calls them directly.

mod apply;
mod outcome;
mod pawns_only;
mod validate;

pub use apply::apply;
pub use outcome::{evaluate, has_legal_move};
pub use pawns_only::PawnsOnly;
pub use validate::{validate, validate_text};

use crate::Board;
use pawns_core::{Color, Move, MoveParseError, Square};
use std::fmt;
use thiserror::Error;

/// How a legal move is carried out, decided against the board before the
/// move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveClass {
    /// One square forward onto an empty cell.
    Advance,
    /// Two squares forward from the home rank.
    DoubleStep,
    /// Diagonal step onto an opposing pawn.
    Capture,
    /// Diagonal step onto an empty cell behind a pawn that just double-stepped.
    EnPassant,
}

impl MoveClass {
    /// Returns true if the move removes an opposing pawn.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveClass::Capture | MoveClass::EnPassant)
    }
}

/// A move certified by the validator, together with its class.
///
/// Only [`validate`] constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    mv: Move,
    class: MoveClass,
}

impl LegalMove {
    pub(crate) const fn new(mv: Move, class: MoveClass) -> Self {
        LegalMove { mv, class }
    }

    /// The underlying move.
    #[inline]
    pub const fn mv(self) -> Move {
        self.mv
    }

    /// How the move is applied.
    #[inline]
    pub const fn class(self) -> MoveClass {
        self.class
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)
    }
}

/// Why a submitted move was refused. The player may simply try again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The text is not four on-board coordinates.
    #[error("Invalid Input")]
    Malformed(#[from] MoveParseError),

    /// The origin does not hold a pawn of the side to move.
    #[error("No {} pawn at {square}", .color.name())]
    NoPawnAtOrigin { color: Color, square: Square },

    /// The move breaks the advance or capture rules.
    #[error("Invalid Input")]
    Illegal(Move),
}

/// Why a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// A pawn reached the far rank.
    FarRank,
    /// The opponent has no pawns left.
    Annihilation,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// `color` wins.
    Win { color: Color, reason: WinReason },
    /// The side to move has pawns but no legal move.
    Stalemate,
}

impl GameResult {
    /// Returns the winning color, or `None` for stalemate.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Win { color, .. } => Some(color),
            GameResult::Stalemate => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { color, .. } => write!(f, "{} wins!", color),
            GameResult::Stalemate => write!(f, "Stalemate!"),
        }
    }
}

/// Trait for implementing pawn-race variants.
///
/// The engine delegates every rules decision to a `RuleSet`, so a variant
/// (a different board width, no double step, ...) only needs a new
/// implementation.
///
/// # Example
///
/// ```
/// use pawns_core::{Color, Move};
/// use pawns_engine::rules::{PawnsOnly, RuleSet};
///
/// let mut board = PawnsOnly.initial_board();
/// let mv = Move::parse("e2e4").unwrap();
/// let legal = PawnsOnly.try_apply(&mut board, Color::White, mv).unwrap();
/// assert!(PawnsOnly.game_result(&board, Color::White).is_none());
/// # let _ = legal;
/// ```
pub trait RuleSet {
    /// Returns the starting board for this variant.
    fn initial_board(&self) -> Board;

    /// Decides whether `color` may play `mv` on `board`.
    fn validate(&self, board: &Board, color: Color, mv: Move) -> Result<LegalMove, Rejection>;

    /// Applies a validated move. Does not touch turn state.
    fn apply(&self, board: &mut Board, color: Color, legal: LegalMove);

    /// Returns the game result after `mover` has moved, or `None` if play
    /// continues.
    fn game_result(&self, board: &Board, mover: Color) -> Option<GameResult>;

    /// Validates and, if legal, applies a move. A rejected move leaves the
    /// board untouched.
    fn try_apply(
        &self,
        board: &mut Board,
        color: Color,
        mv: Move,
    ) -> Result<LegalMove, Rejection> {
        let legal = self.validate(board, color, mv)?;
        self.apply(board, color, legal);
        Ok(legal)
    }
}
