//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::CELL_COUNT};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of a completed line: three equal, non-empty cells
    pub fn line_owner(cells: &[Cell; CELL_COUNT], line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = *line;
        if cells[a] == cells[b] && cells[b] == cells[c] {
            cells[a].to_player()
        } else {
            None
        }
    }

    /// Owner of the first completed line in [`WINNING_LINES`] order
    pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; CELL_COUNT], player: Player) -> bool {
        Self::winning_lines(cells, player).next().is_some()
    }

    /// All lines completed by `player`
    pub fn winning_lines(
        cells: &[Cell; CELL_COUNT],
        player: Player,
    ) -> impl Iterator<Item = &'static [usize; 3]> + '_ {
        let lines: &'static [[usize; 3]; 8] = &WINNING_LINES;
        lines
            .iter()
            .filter(move |line| Self::line_owner(cells, line) == Some(player))
    }
}
