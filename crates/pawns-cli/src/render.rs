//! Text rendering of the board.

use pawns_core::{File, Rank, Square};
use pawns_engine::Board;

const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";
const LEGEND: &str = "    a   b   c   d   e   f   g   h";

/// Draws the board with rank 8 at the top, 'W' and 'B' marking pawns.
pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(18);
    for rank in Rank::ALL.into_iter().rev() {
        let cells: String = File::ALL
            .into_iter()
            .map(|file| format!(" {} |", board.cell(Square::new(file, rank)).mark()))
            .collect();
        lines.push(SEPARATOR.to_string());
        lines.push(format!("{} |{}", rank, cells));
    }
    lines.push(SEPARATOR.to_string());
    lines.push(LEGEND.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
