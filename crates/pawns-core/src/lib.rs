//! Core types for pawns-only chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! front ends:
//! - [`Color`] for the two sides
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Cell`] for what a board cell holds
//! - [`Move`] and [`MoveKind`] for parsed moves
//! - Pawns-only FEN parsing and serialization

mod cell;
mod color;
mod fen;
mod mov;
mod square;

pub use cell::Cell;
pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{Move, MoveKind, MoveParseError};
pub use square::{File, Rank, Square};
