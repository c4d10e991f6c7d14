//! Board state: cell occupancy plus per-color en passant eligibility.

use pawns_core::{Cell, Color, Fen, File, Rank, Square};
use std::fmt;

/// The set of files on which a color's pawn has just made a two-square
/// advance and may be captured en passant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnPassantFiles(u8);

impl EnPassantFiles {
    /// An empty set.
    pub const EMPTY: EnPassantFiles = EnPassantFiles(0);

    /// Returns true if the file is in the set.
    #[inline]
    pub const fn contains(self, file: File) -> bool {
        self.0 & (1 << file.index()) != 0
    }

    /// Returns true if no file is in the set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of files in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the files in the set, a to h.
    pub fn iter(self) -> impl Iterator<Item = File> {
        File::ALL.into_iter().filter(move |&f| self.contains(f))
    }

    #[inline]
    fn insert(&mut self, file: File) {
        self.0 |= 1 << file.index();
    }

    #[inline]
    fn clear(&mut self) {
        self.0 = 0;
    }
}

impl fmt::Debug for EnPassantFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The 8x8 grid of cells and the two en passant sets.
///
/// The board performs no validation. Only the rules module and
/// [`Position`](crate::Position) write to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 64],
    en_passant: [EnPassantFiles; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pawns.
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 64],
            en_passant: [EnPassantFiles::EMPTY; 2],
        }
    }

    /// Creates the starting board: White on rank 2, Black on rank 7.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for file in File::ALL {
                board.set_cell(Square::new(file, color.home_rank()), Cell::Pawn(color));
            }
        }
        board
    }

    /// Builds a board from a decoded FEN record.
    ///
    /// The en passant target, if present, seeds the set of the color that
    /// made the two-square advance.
    pub fn from_fen(fen: &Fen) -> Self {
        let mut board = Board {
            cells: fen.cells,
            en_passant: [EnPassantFiles::EMPTY; 2],
        };
        if let (Some(sq), Some(color)) = (fen.en_passant, fen.en_passant_color()) {
            board.mark_en_passant(color, sq.file());
        }
        board
    }

    /// Encodes the board as pawns-only FEN with the given side to move.
    ///
    /// Only the opponent of `side_to_move` can hold a live en passant flag,
    /// so that set supplies the target square.
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mover = side_to_move.opposite();
        let en_passant = self.en_passant(mover).iter().next().and_then(|file| {
            Square::new(file, mover.double_step_rank()).offset(0, -mover.pawn_direction())
        });
        Fen {
            cells: self.cells,
            active_color: side_to_move,
            en_passant,
        }
        .to_string()
    }

    /// Returns what occupies the given square.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Returns the files on which `color` may currently be captured en passant.
    #[inline]
    pub fn en_passant(&self, color: Color) -> EnPassantFiles {
        self.en_passant[color.index()]
    }

    /// Empties `color`'s en passant set.
    #[inline]
    pub fn clear_en_passant(&mut self, color: Color) {
        self.en_passant[color.index()].clear();
    }

    /// Iterates over the squares holding a pawn of `color`, rank 1 first.
    pub fn pawns(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.cell(sq).is_pawn_of(color))
    }

    /// Counts the pawns of `color` on the board.
    pub fn pawn_count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| c.is_pawn_of(color)).count()
    }

    /// Returns true if `color` has a pawn anywhere on `rank`.
    pub fn has_pawn_on_rank(&self, color: Color, rank: Rank) -> bool {
        File::ALL
            .into_iter()
            .any(|file| self.cell(Square::new(file, rank)).is_pawn_of(color))
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    #[inline]
    pub(crate) fn clear_cell(&mut self, sq: Square) {
        self.set_cell(sq, Cell::Empty);
    }

    #[inline]
    pub(crate) fn mark_en_passant(&mut self, color: Color, file: File) {
        self.en_passant[color.index()].insert(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_layout() {
        let board = Board::startpos();
        assert_eq!(board.pawn_count(Color::White), 8);
        assert_eq!(board.pawn_count(Color::Black), 8);
        assert_eq!(board.cell(sq("a2")), Cell::Pawn(Color::White));
        assert_eq!(board.cell(sq("h7")), Cell::Pawn(Color::Black));
        assert_eq!(board.cell(sq("e4")), Cell::Empty);
        assert!(board.en_passant(Color::White).is_empty());
        assert!(board.en_passant(Color::Black).is_empty());
    }

    #[test]
    fn startpos_matches_fen() {
        let fen = Fen::parse(Fen::STARTPOS).unwrap();
        assert_eq!(Board::from_fen(&fen), Board::startpos());
        assert_eq!(Board::startpos().to_fen(Color::White), Fen::STARTPOS);
    }

    #[test]
    fn en_passant_set_operations() {
        let mut files = EnPassantFiles::EMPTY;
        assert!(files.is_empty());
        files.insert(File::D);
        files.insert(File::G);
        assert!(files.contains(File::D));
        assert!(!files.contains(File::E));
        assert_eq!(files.len(), 2);
        assert_eq!(files.iter().collect::<Vec<_>>(), vec![File::D, File::G]);
        files.clear();
        assert!(files.is_empty());
    }

    #[test]
    fn clear_en_passant_only_touches_one_color() {
        let mut board = Board::empty();
        board.mark_en_passant(Color::White, File::E);
        board.mark_en_passant(Color::Black, File::D);
        board.clear_en_passant(Color::Black);
        assert!(board.en_passant(Color::Black).is_empty());
        assert!(board.en_passant(Color::White).contains(File::E));
    }

    #[test]
    fn fen_seeds_en_passant() {
        let fen = Fen::parse("8/8/8/3p4/4P3/8/8/8 w d6").unwrap();
        let board = Board::from_fen(&fen);
        assert!(board.en_passant(Color::Black).contains(File::D));
        assert!(board.en_passant(Color::White).is_empty());
        assert_eq!(board.to_fen(Color::White), "8/8/8/3p4/4P3/8/8/8 w d6");
    }

    #[test]
    fn pawns_and_ranks() {
        let fen = Fen::parse("8/7P/8/8/8/8/p7/8 w").unwrap();
        let board = Board::from_fen(&fen);
        assert_eq!(board.pawns(Color::White).collect::<Vec<_>>(), vec![sq("h7")]);
        assert_eq!(board.pawns(Color::Black).collect::<Vec<_>>(), vec![sq("a2")]);
        assert!(board.has_pawn_on_rank(Color::White, Rank::R7));
        assert!(!board.has_pawn_on_rank(Color::White, Rank::R8));
        assert!(board.has_pawn_on_rank(Color::Black, Rank::R2));
    }
}
