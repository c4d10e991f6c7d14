//! Board cell occupancy.

use crate::Color;

/// What a single board cell holds. Pawns are the only pieces in this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Pawn(Color),
}

impl Cell {
    /// Returns true if the cell holds no pawn.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds a pawn of the given color.
    #[inline]
    pub fn is_pawn_of(self, color: Color) -> bool {
        self == Cell::Pawn(color)
    }

    /// Returns the color of the pawn in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Pawn(color) => Some(color),
        }
    }

    /// Returns the FEN character for an occupied cell ('P' or 'p').
    pub const fn to_fen_char(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Pawn(Color::White) => Some('P'),
            Cell::Pawn(Color::Black) => Some('p'),
        }
    }

    /// Parses a FEN piece character. Only pawns are accepted.
    pub const fn from_fen_char(c: char) -> Option<Cell> {
        match c {
            'P' => Some(Cell::Pawn(Color::White)),
            'p' => Some(Cell::Pawn(Color::Black)),
            _ => None,
        }
    }

    /// Returns the single-letter mark used when drawing the board.
    pub const fn mark(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Pawn(Color::White) => 'W',
            Cell::Pawn(Color::Black) => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_to_fen() {
        assert_eq!(Cell::Pawn(Color::White).to_fen_char(), Some('P'));
        assert_eq!(Cell::Pawn(Color::Black).to_fen_char(), Some('p'));
        assert_eq!(Cell::Empty.to_fen_char(), None);
    }

    #[test]
    fn cell_from_fen() {
        assert_eq!(Cell::from_fen_char('P'), Some(Cell::Pawn(Color::White)));
        assert_eq!(Cell::from_fen_char('p'), Some(Cell::Pawn(Color::Black)));
        assert_eq!(Cell::from_fen_char('K'), None);
        assert_eq!(Cell::from_fen_char('n'), None);
    }

    #[test]
    fn marks() {
        assert_eq!(Cell::Empty.mark(), ' ');
        assert_eq!(Cell::Pawn(Color::White).mark(), 'W');
        assert_eq!(Cell::Pawn(Color::Black).mark(), 'B');
    }

    #[test]
    fn occupancy() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::Pawn(Color::White).is_pawn_of(Color::White));
        assert!(!Cell::Pawn(Color::White).is_pawn_of(Color::Black));
        assert_eq!(Cell::Pawn(Color::Black).color(), Some(Color::Black));
        assert_eq!(Cell::default(), Cell::Empty);
    }
}
