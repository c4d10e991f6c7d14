//! Rules engine for pawns-only chess.
//!
//! This crate provides:
//! - [`Board`] - cell occupancy plus per-color en passant eligibility
//! - [`Position`] - a board and the side to move
//! - [`Game`] - move submission, turn handling, and result tracking
//! - [`RuleSet`] - trait for implementing pawn-race variants
//! - Legality checking, move application, and game-end detection
//! - Legal move generation and perft
//!
//! # Example
//!
//! ```
//! use pawns_engine::Game;
//!
//! let mut game = Game::new();
//! game.submit("e2e4").unwrap();
//! game.submit("d7d5").unwrap();
//! let report = game.submit("e4d5").unwrap();
//! assert!(report.legal.class().is_capture());
//! assert_eq!(game.to_fen(), "8/ppp1pppp/8/3P4/8/8/PPPP1PPP/8 b -");
//! ```

mod board;
mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use board::{Board, EnPassantFiles};
pub use game::{Game, GameError, MoveReport};
pub use movegen::{legal_moves, MoveList};
pub use position::Position;
pub use rules::{
    GameResult, LegalMove, MoveClass, PawnsOnly, Rejection, RuleSet, WinReason,
};
