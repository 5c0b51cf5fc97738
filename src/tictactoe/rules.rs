//! Game rules: turn order, legal actions, move application and outcomes

use std::collections::HashSet;

use super::{
    board::{Action, Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Player whose turn it is, derived from the board contents alone.
    ///
    /// An odd number of empty cells means X is to move, an even number means
    /// O. A full board has no next player.
    pub fn current_player(&self) -> Option<Player> {
        match self.piece_count().empty {
            0 => None,
            n if n % 2 == 1 => Some(Player::X),
            _ => Some(Player::O),
        }
    }

    /// Every empty cell, as an unordered set.
    ///
    /// Use [`Board::empty_cells`] when a stable order is needed.
    pub fn legal_actions(&self) -> HashSet<Action> {
        self.empty_cells().into_iter().collect()
    }

    /// Return the board after the player to move claims `action`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`](crate::Error::InvalidAction) if the
    /// coordinates are off the board or the cell is occupied.
    #[must_use = "apply_action returns a new board; the original is unchanged"]
    pub fn apply_action(&self, action: Action) -> Result<Board, crate::Error> {
        let invalid = || crate::Error::InvalidAction {
            row: action.row,
            col: action.col,
        };

        let index = action.index().ok_or_else(invalid)?;
        if !self.is_empty(action) {
            return Err(invalid());
        }
        // A board with an empty cell always has a player to move
        let player = self.current_player().ok_or_else(invalid)?;

        Ok(self.with_cell(index, player.to_cell()))
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(self.cells())
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(self.cells(), player)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.piece_count().empty == 0
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Outcome from X's point of view: 1 for an X win, -1 for an O win, 0
    /// otherwise. Only meaningful on terminal boards, but never fails.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}
