//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Action, Board, Player};
use crate::search::Minimax;

/// A single recorded move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A complete game with history.
///
/// Only the starting board and the plies are stored; every later board and
/// the outcome are recomputed by replaying the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub plies: Vec<Ply>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            plies: Vec::new(),
        }
    }

    /// Replay plies up to a given index (exclusive), applying `visit` to
    /// every board after the initial one.
    ///
    /// # Errors
    ///
    /// Returns error if a ply is illegal, was recorded for the wrong player,
    /// or follows a finished game. This indicates corrupted game data.
    fn replay_until(
        &self,
        end_index: usize,
        mut visit: impl FnMut(Board),
    ) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for (index, ply) in self.plies.iter().take(end_index).enumerate() {
            let invalid = |message: String| crate::Error::InvalidHistory { index, message };

            if board.is_terminal() {
                return Err(invalid("game was already over".to_string()));
            }
            if board.current_player() != Some(ply.player) {
                return Err(invalid(format!(
                    "recorded for {} but it was {}'s turn",
                    ply.player,
                    board.current_player().map_or('-', |p| p.to_cell().to_char())
                )));
            }
            board = board
                .apply_action(ply.action)
                .map_err(|e| invalid(e.to_string()))?;
            visit(board);
        }
        Ok(board)
    }

    /// Current board state
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay.
    pub fn current(&self) -> Result<Board, crate::Error> {
        self.replay_until(self.plies.len(), |_| {})
    }

    /// Every board from the initial one to the current one
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay.
    pub fn boards(&self) -> Result<Vec<Board>, crate::Error> {
        let mut boards = Vec::with_capacity(self.plies.len() + 1);
        boards.push(self.initial);
        self.replay_until(self.plies.len(), |board| boards.push(board))?;
        Ok(boards)
    }

    /// Outcome of the game so far, `None` while it is still running
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history does not replay.
    pub fn outcome(&self) -> Result<Option<GameOutcome>, crate::Error> {
        Ok(GameOutcome::of(&self.current()?))
    }

    /// Play a move for whoever is to move
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        let current = self.current()?;
        if current.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = current.current_player().ok_or(crate::Error::GameOver)?;
        let next = current.apply_action(action)?;

        debug!(%player, %action, board = %next.encode(), "ply");

        self.plies.push(Ply { action, player });
        Ok(())
    }

    /// Let the searcher pick a move for both sides until the game ends
    pub fn self_play(searcher: &Minimax) -> Result<Self, crate::Error> {
        let mut game = Self::new();
        game.play_out(searcher)?;
        Ok(game)
    }

    /// Continue with searcher-chosen moves until the game ends
    pub fn play_out(&mut self, searcher: &Minimax) -> Result<(), crate::Error> {
        while let Some(action) = searcher.best_action(&self.current()?) {
            self.play(action)?;
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(
            game.plies,
            vec![
                Ply {
                    action: Action::new(1, 1),
                    player: Player::X
                },
                Ply {
                    action: Action::new(0, 0),
                    player: Player::O
                },
            ]
        );
        let boards = game.boards().unwrap();
        assert_eq!(boards.len(), 3);
        assert_eq!(boards[2], game.current().unwrap());
        assert_eq!(game.outcome().unwrap(), None);
    }

    #[test]
    fn test_rejects_illegal_and_late_moves() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        assert!(matches!(
            game.play(Action::new(0, 0)),
            Err(crate::Error::InvalidAction { row: 0, col: 0 })
        ));
        assert_eq!(game.plies.len(), 1);

        for (row, col) in [(1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }
        assert_eq!(game.outcome().unwrap(), Some(GameOutcome::Win(Player::X)));
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
        assert_eq!(game.plies.len(), 5);
    }

    #[test]
    fn test_from_terminal_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(game.outcome().unwrap(), Some(GameOutcome::Draw));
        assert!(matches!(
            game.play(Action::new(0, 0)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_won_board_with_empty_cells_rejects_moves() {
        // X X X
        // O O .
        // . . .
        let board = Board::from_string("XXXOO....").unwrap();
        let mut game = Game::from_board(board);
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
        assert!(game.plies.is_empty());
    }

    #[test]
    fn test_corrupted_history_is_reported() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        // Occupied cell pushed behind the game's back
        game.plies.push(Ply {
            action: Action::new(0, 0),
            player: Player::O,
        });

        assert!(matches!(
            game.current(),
            Err(crate::Error::InvalidHistory { index: 1, .. })
        ));
        assert!(matches!(
            game.boards(),
            Err(crate::Error::InvalidHistory { index: 1, .. })
        ));
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::InvalidHistory { .. })
        ));
    }

    #[test]
    fn test_wrong_player_in_history_is_reported() {
        let mut game = Game::new();
        game.plies.push(Ply {
            action: Action::new(1, 1),
            player: Player::O,
        });
        let err = game.current().unwrap_err();
        assert!(matches!(err, crate::Error::InvalidHistory { index: 0, .. }));
        assert!(err.to_string().contains("X's turn"));
    }

    #[test]
    fn test_ply_after_win_in_history_is_reported() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(row, col)).unwrap();
        }
        game.plies.push(Ply {
            action: Action::new(1, 2),
            player: Player::O,
        });
        assert!(matches!(
            game.outcome(),
            Err(crate::Error::InvalidHistory { index: 5, .. })
        ));
    }

    #[test]
    fn test_deserialized_game_is_replayed() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let parsed: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, game);
        assert_eq!(parsed.current().unwrap(), game.current().unwrap());

        let empty: Game = serde_json::from_str(
            &serde_json::to_string(&Game::from_board(Board::new())).unwrap(),
        )
        .unwrap();
        assert_eq!(empty.current().unwrap(), Board::new());
    }

    #[test]
    fn test_deserialized_bad_history_is_reported() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        let mut value = serde_json::to_value(&game).unwrap();
        value["plies"][0]["action"]["row"] = serde_json::json!(7);

        let parsed: Game = serde_json::from_value(value).unwrap();
        let err = parsed.boards().unwrap_err();
        assert!(matches!(err, crate::Error::InvalidHistory { index: 0, .. }));
        assert!(err.to_string().contains("(7, 1)"));
    }

    #[test]
    fn test_play_out_propagates_history_errors() {
        let mut game = Game::new();
        game.plies.push(Ply {
            action: Action::new(3, 3),
            player: Player::X,
        });
        assert!(matches!(
            game.play_out(&Minimax::default()),
            Err(crate::Error::InvalidHistory { index: 0, .. })
        ));
        assert_eq!(game.plies.len(), 1);
    }

    #[test]
    fn test_self_play_is_a_draw() {
        let game = Game::self_play(&Minimax::default()).unwrap();
        assert_eq!(game.outcome().unwrap(), Some(GameOutcome::Draw));
        assert_eq!(game.plies.len(), 9);
        assert_eq!(game.current().unwrap().utility(), 0);
    }
}
