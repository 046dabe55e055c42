//! Turn-based game state machine
//!
//! [`GameState`] owns the board and move history, alternates players and
//! runs win detection after every accepted move.

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Cell, Pos};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::rules::{has_win_at, winning_line};

/// Current status of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still accepted
    InProgress,
    /// Board filled without a winner
    Draw,
    /// Game ended with a completed line
    Won(Cell),
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Board, history and turn order for one game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    connections: usize,
    current_player: Cell,
    status: GameStatus,
    /// Played positions, oldest first
    history: Vec<Pos>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        info!(
            size = config.size(),
            connections = config.connections(),
            starter = %config.starter(),
            "new game"
        );
        Self {
            board: Board::new(config.size()),
            connections: config.connections(),
            current_player: config.starter(),
            status: GameStatus::InProgress,
            history: Vec::with_capacity(config.size() * config.size()),
        }
    }

    /// Play the current player's mark at `pos`.
    ///
    /// The turn passes to the other player after every legal move, including
    /// the one that ends the game, so [`undo`](Self::undo) can always hand it
    /// back.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if `pos` is off the board
    /// - `InvalidMove` if the cell is occupied
    /// - `InvalidState` if the game has already ended
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select(&mut self, pos: Pos) -> Result<GameStatus> {
        let size = self.board.size();
        if !self.board.contains(pos.row, pos.col) {
            warn!("selection outside the board");
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size,
            });
        }
        if !self.board.is_empty(pos) {
            warn!(occupant = %self.board.get(pos), "cell occupied");
            return Err(GameError::InvalidMove { position: pos });
        }
        if self.status.is_over() {
            return Err(GameError::InvalidState("game is already over"));
        }

        let player = self.current_player;
        self.board.set(pos, player);
        self.history.push(pos);
        debug!(%pos, move_number = self.history.len(), "move accepted");

        if has_win_at(&self.board, pos, player, self.connections) {
            self.status = GameStatus::Won(player);
            info!(winner = %player, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("game drawn");
        }

        self.current_player = player.opponent();
        Ok(self.status)
    }

    /// Take back the most recent move.
    ///
    /// Status always returns to `InProgress`; the outcome of the earlier
    /// position is not recomputed.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Pos> {
        let last = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board.clear(last);
        self.current_player = self.current_player.opponent();
        self.status = GameStatus::InProgress;
        debug!(pos = %last, "move undone");
        Ok(last)
    }

    /// Clear the board for a new game.
    ///
    /// The player who opened the game that just ended opens the next one.
    ///
    /// # Errors
    ///
    /// `InvalidState` if no move has been played yet.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<()> {
        let first = *self
            .history
            .first()
            .ok_or(GameError::InvalidState("cannot reset a game with no moves"))?;
        self.current_player = self.board.get(first);
        self.board.clear_all();
        self.history.clear();
        self.status = GameStatus::InProgress;
        info!(starter = %self.current_player, "game reset");
        Ok(())
    }

    /// Read-only snapshot of the grid
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Connections needed to win
    #[inline]
    pub fn connections(&self) -> usize {
        self.connections
    }

    #[inline]
    pub fn current_player(&self) -> Cell {
        self.current_player
    }

    /// Player who opened the current game
    pub fn starter(&self) -> Cell {
        self.history
            .first()
            .map_or(self.current_player, |&first| self.board.get(first))
    }

    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    /// Cells of the completed line when the game has been won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match self.status {
            GameStatus::Won(winner) => {
                winning_line(&self.board, self.last_move()?, winner, self.connections)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: usize, connections: usize, starter: Cell) -> GameState {
        GameState::new(GameConfig::new(size, connections, starter).unwrap())
    }

    fn play(game: &mut GameState, moves: &[(usize, usize)]) -> GameStatus {
        let mut status = game.status();
        for &(r, c) in moves {
            status = game.select(Pos::new(r, c)).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game() {
        let g = game(4, 3, Cell::O);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.current_player(), Cell::O);
        assert_eq!(g.connections(), 3);
        assert_eq!(g.board().size(), 4);
        assert!(g.history().is_empty());
    }

    #[test]
    fn test_players_alternate() {
        let mut g = game(3, 3, Cell::X);
        g.select(Pos::new(0, 0)).unwrap();
        assert_eq!(g.current_player(), Cell::O);
        g.select(Pos::new(1, 1)).unwrap();
        assert_eq!(g.current_player(), Cell::X);
        assert_eq!(g.board().get(Pos::new(1, 1)), Cell::O);
    }

    #[test]
    fn test_select_occupied_fails_and_leaves_board() {
        let mut g = game(3, 3, Cell::X);
        g.select(Pos::new(0, 0)).unwrap();
        let before = g.board().clone();
        let player = g.current_player();

        let err = g.select(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, GameError::InvalidMove { position: Pos::new(0, 0) });
        assert_eq!(g.board(), &before);
        assert_eq!(g.current_player(), player);
        assert_eq!(g.history().len(), 1);
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut g = game(3, 3, Cell::X);
        assert_eq!(
            g.select(Pos::new(3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert!(g.history().is_empty());
    }

    #[test]
    fn test_row_win() {
        let mut g = game(3, 3, Cell::X);
        let status = play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(status, GameStatus::Won(Cell::X));
        // Turn still passes after the winning move
        assert_eq!(g.current_player(), Cell::O);
        assert_eq!(
            g.winning_line(),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
    }

    #[test]
    fn test_anti_diagonal_win_on_larger_board() {
        let mut g = game(4, 3, Cell::X);
        let status = play(&mut g, &[(0, 3), (3, 3), (1, 2), (3, 2), (2, 1)]);
        assert_eq!(status, GameStatus::Won(Cell::X));
    }

    #[test]
    fn test_draw() {
        let mut g = game(3, 3, Cell::X);
        // X O X / X O O / O X X
        let status = play(
            &mut g,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(status, GameStatus::Draw);
        assert!(g.winning_line().is_none());
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut g = game(3, 3, Cell::X);
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(matches!(
            g.select(Pos::new(2, 2)),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn test_undo_round_trip() {
        let mut g = game(4, 3, Cell::O);
        play(&mut g, &[(0, 0), (2, 3)]);
        let board = g.board().clone();
        let player = g.current_player();

        g.select(Pos::new(3, 1)).unwrap();
        assert_eq!(g.undo(), Ok(Pos::new(3, 1)));
        assert_eq!(g.board(), &board);
        assert_eq!(g.current_player(), player);
        assert_eq!(g.history().len(), 2);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut g = game(3, 3, Cell::X);
        assert_eq!(g.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn test_undo_winning_move_resumes_play() {
        let mut g = game(3, 3, Cell::X);
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        g.undo().unwrap();
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.current_player(), Cell::X);
        assert!(g.board().is_empty(Pos::new(0, 2)));
    }

    #[test]
    fn test_reset_restores_starter() {
        let mut g = game(3, 3, Cell::O);
        play(&mut g, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(g.current_player(), Cell::X);
        assert_eq!(g.starter(), Cell::O);

        g.reset().unwrap();
        assert_eq!(g.status(), GameStatus::InProgress);
        assert!(g.history().is_empty());
        assert_eq!(g.board().empty_count(), 9);
        assert_eq!(g.current_player(), Cell::O);
    }

    #[test]
    fn test_reset_after_win() {
        let mut g = game(3, 3, Cell::X);
        play(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        g.reset().unwrap();
        assert_eq!(g.current_player(), Cell::X);
        assert_eq!(g.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_reset_without_history_fails() {
        let mut g = game(3, 3, Cell::X);
        assert!(matches!(g.reset(), Err(GameError::InvalidState(_))));
    }
}
