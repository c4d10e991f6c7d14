//! Pawns-only FEN parsing and serialization.
//!
//! The format keeps the first fields of standard FEN that mean something
//! without other pieces:
//!
//! ```text
//! <placement> <active color> [<en passant target>]
//! ```
//!
//! Placement lists ranks 8 down to 1, `P` for a white pawn, `p` for a black
//! pawn, digits for runs of empty cells. The en passant target is the square
//! skipped by a two-square advance made on the previous ply.

use crate::{Cell, Color, Rank, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing pawns-only FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 2 or 3 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("too many {} pawns: {count}", .color.name())]
    TooManyPawns { color: Color, count: usize },

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("en passant square {square} does not follow a two-square advance by {}", .color.name())]
    EnPassantWithoutDoubleStep { square: Square, color: Color },
}

/// A decoded pawns-only FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Cells indexed by [`Square::index`].
    pub cells: [Cell; 64],
    /// Side to move.
    pub active_color: Color,
    /// Square skipped by the last two-square advance, if any.
    pub en_passant: Option<Square>,
}

impl Fen {
    /// The starting position: a full rank of pawns each, White to move.
    pub const STARTPOS: &'static str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 w -";

    /// Parses a pawns-only FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let cells = Self::parse_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let en_passant = match parts.get(2) {
            None | Some(&"-") => None,
            Some(s) => Some(Self::parse_en_passant(s, active_color, &cells)?),
        };

        Ok(Fen {
            cells,
            active_color,
            en_passant,
        })
    }

    fn parse_placement(placement: &str) -> Result<[Cell; 64], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut cells = [Cell::Empty; 64];
        for (row, text) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as usize;
                } else if let Some(cell) = Cell::from_fen_char(c) {
                    if file < 8 {
                        cells[rank * 8 + file] = cell;
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares",
                    rank + 1,
                    file
                )));
            }
        }

        for color in Color::ALL {
            let count = cells.iter().filter(|c| c.is_pawn_of(color)).count();
            if count > 8 {
                return Err(FenError::TooManyPawns { color, count });
            }
        }

        Ok(cells)
    }

    fn parse_en_passant(
        s: &str,
        active_color: Color,
        cells: &[Cell; 64],
    ) -> Result<Square, FenError> {
        let square = Square::from_algebraic(s)
            .ok_or_else(|| FenError::InvalidEnPassantSquare(s.to_string()))?;
        if !matches!(square.rank(), Rank::R3 | Rank::R6) {
            return Err(FenError::InvalidEnPassantSquare(s.to_string()));
        }

        // The advance was made by the side not to move, on the previous ply.
        let mover = active_color.opposite();
        let origin = Square::new(square.file(), mover.home_rank());
        let landing = Square::new(square.file(), mover.double_step_rank());
        let consistent = landing.offset(0, -mover.pawn_direction()) == Some(square)
            && cells[landing.index()] == Cell::Pawn(mover)
            && cells[square.index()].is_empty()
            && cells[origin.index()].is_empty();
        if !consistent {
            return Err(FenError::EnPassantWithoutDoubleStep {
                square,
                color: mover,
            });
        }
        Ok(square)
    }

    /// Returns the color whose two-square advance produced the en passant
    /// target, if there is one. That is always the side not to move.
    pub fn en_passant_color(&self) -> Option<Color> {
        self.en_passant.map(|_| self.active_color.opposite())
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.cells[rank * 8 + file].to_fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", c)?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        let side = match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {}", side)?;

        match self.en_passant {
            Some(sq) => write!(f, " {}", sq),
            None => write!(f, " -"),
        }
    }
}
