//! Board state validation logic
//!
//! The rules and search never call into this module. It exists for callers
//! that build boards themselves and want to know whether legal play could
//! have produced them.

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board could arise from legal play starting with X
    pub fn is_reachable(&self) -> bool {
        let count = self.piece_count();

        // X moves first and players alternate
        let diff = count.x as isize - count.o as isize;
        if diff != 0 && diff != 1 {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && diff != 1 {
            return false;
        }
        if o_wins && diff != 0 {
            return false;
        }

        // Several lines can only be completed together by one move through
        // a shared cell
        [Player::X, Player::O]
            .into_iter()
            .all(|player| self.winning_lines_share_cell(player))
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines: Vec<_> = LineAnalyzer::winning_lines(self.cells(), player).collect();

        if lines.len() < 2 {
            return true;
        }

        (0..self.cells().len()).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}
