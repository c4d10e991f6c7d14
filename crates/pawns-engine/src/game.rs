//! Game management: one submitted move at a time, from text to result.
//!
//! The [`Game`] struct is what a front end talks to. It owns the
//! [`Position`], counts plies, and remembers the result once the game has
//! ended.

use crate::movegen::{legal_moves, MoveList};
use crate::rules::{GameResult, LegalMove, PawnsOnly, Rejection, RuleSet};
use crate::{Board, Position};
use pawns_core::{Color, FenError, Move};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move was refused; the same player moves again.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// The side that made the move.
    pub mover: Color,
    /// The move as applied.
    pub legal: LegalMove,
    /// The result, if this move ended the game.
    pub result: Option<GameResult>,
}

/// A pawns-only chess game.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    ply_count: usize,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting position.
    pub fn new() -> Self {
        Game {
            position: Position::startpos(),
            ply_count: 0,
            result: None,
        }
    }

    /// Creates a game from a custom position.
    ///
    /// The position is judged as if the side not to move had just moved, so
    /// a position that is already won or stalemated starts finished.
    pub fn from_position(position: Position) -> Self {
        let last_mover = position.side_to_move().opposite();
        let result = PawnsOnly.game_result(position.board(), last_mover);
        Game {
            position,
            ply_count: 0,
            result,
        }
    }

    /// Creates a game from a pawns-only FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the board, for rendering.
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.ply_count
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(self.position.board(), self.position.side_to_move())
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Parses and plays a move given as coordinate text (e.g., "e2e4").
    pub fn submit(&mut self, text: &str) -> Result<MoveReport, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let mv = Move::parse(text).map_err(|e| {
            trace!(input = text, error = %e, "malformed move text");
            Rejection::from(e)
        })?;
        self.play(mv)
    }

    /// Plays an already parsed move for the side to move.
    ///
    /// A rejected move changes nothing: board, en passant flags and turn
    /// stay as they were.
    pub fn play(&mut self, mv: Move) -> Result<MoveReport, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let mover = self.position.side_to_move();
        let legal = self.position.validate(mv).map_err(|rejection| {
            trace!(%mv, color = %mover, %rejection, "move rejected");
            rejection
        })?;

        self.position.make_move(legal);
        self.ply_count += 1;
        debug!(%mv, color = %mover, class = ?legal.class(), ply = self.ply_count, "move applied");

        let result = PawnsOnly.game_result(self.position.board(), mover);
        if let Some(result) = result {
            debug!(%result, ply = self.ply_count, "game over");
        }
        self.result = result;

        Ok(MoveReport {
            mover,
            legal,
            result,
        })
    }
}
