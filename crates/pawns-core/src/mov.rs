//! Move representation and move-text parsing.

use crate::{File, Rank, Square};
use std::fmt;
use thiserror::Error;

/// Errors produced while turning move text into a [`Move`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected 4 characters, got {0}")]
    Length(usize),

    #[error("origin '{0}' is not on the board")]
    Origin(String),

    #[error("destination '{0}' is not on the board")]
    Destination(String),
}

/// How a move is treated by the rules, decided by comparing files alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Origin and destination share a file.
    Advance,
    /// Origin and destination are on different files.
    Capture,
}

/// A pawn move from one square to another.
///
/// A move carries no color; the side to move supplies it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Parses coordinate text such as "e2e4".
    ///
    /// The origin is checked before the destination, so "z9e4" reports the
    /// origin and "e2e9" reports the destination.
    pub fn parse(text: &str) -> Result<Self, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::Length(chars.len()));
        }
        let from = square_from_chars(chars[0], chars[1])
            .ok_or_else(|| MoveParseError::Origin(chars[..2].iter().collect()))?;
        let to = square_from_chars(chars[2], chars[3])
            .ok_or_else(|| MoveParseError::Destination(chars[2..].iter().collect()))?;
        Ok(Move::new(from, to))
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Classifies the move as an advance or a capture candidate.
    #[inline]
    pub fn kind(self) -> MoveKind {
        if self.from.file() == self.to.file() {
            MoveKind::Advance
        } else {
            MoveKind::Capture
        }
    }

    /// Signed rank change, positive toward rank 8.
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        self.to.rank().index() as i8 - self.from.rank().index() as i8
    }

    /// Number of files between origin and destination.
    #[inline]
    pub const fn file_distance(self) -> u8 {
        self.to.file().index().abs_diff(self.from.file().index())
    }
}

fn square_from_chars(file: char, rank: char) -> Option<Square> {
    Some(Square::new(File::from_char(file)?, Rank::from_char(rank)?))
}

impl std::str::FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
