//! Heuristic decision engine
//!
//! The engine looks at a board snapshot and picks one move by asking a list
//! of strategies in priority order:
//!
//! 1. **Win**: complete one of its own lines
//! 2. **Block**: take the cell that would complete an opponent line
//! 3. **Fork create / fork block**: reserved, currently always decline
//! 4. **Proximity**: play next to one of its own marks
//! 5. **Random**: any empty cell
//!
//! The board handed to [`DecisionEngine::think`] is never modified; each
//! call works on its own private copy.
//!
//! # Example
//!
//! ```
//! use super_tictactoe::{Board, Cell, DecisionEngine, Pos, StrategyState};
//!
//! let board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
//! let mut engine = DecisionEngine::new(Cell::O, 3).unwrap();
//!
//! let decision = engine.think_with_stats(&board).unwrap();
//! assert_eq!(decision.position, Pos::new(1, 2));
//! assert_eq!(decision.strategy, StrategyState::Win);
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::board::{Board, Cell, Pos};
use crate::error::{GameError, Result};
use crate::strategy::{default_sequence, Analysis, Strategy};

/// What the engine is doing, or why it chose its last move.
///
/// Purely diagnostic: it never feeds back into later decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyState {
    /// Waiting for the next request
    #[default]
    Idle,
    /// Analysing a board
    Thinking,
    /// Completed its own line
    Win,
    /// Blocked an opponent line
    Block,
    /// Created a fork
    ForkCreate,
    /// Blocked an opponent fork
    ForkBlock,
    /// Played next to its own mark
    ProximityHeuristic,
    /// Picked a random empty cell
    Random,
}

/// Move chosen by the engine and the strategy that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub position: Pos,
    pub strategy: StrategyState,
}

/// Callback invoked on every status change
pub type StatusHook = Box<dyn FnMut(StrategyState) + Send>;

/// Heuristic player for one side of the board
pub struct DecisionEngine {
    /// Value the engine plays
    value: Cell,
    connections: usize,
    strategies: Vec<Box<dyn Strategy>>,
    status: StrategyState,
    on_status_change: Option<StatusHook>,
}

impl DecisionEngine {
    /// Create an engine playing `value` with an entropy-seeded random fallback.
    ///
    /// # Errors
    ///
    /// `InvalidState` if `value` is [`Cell::Empty`].
    pub fn new(value: Cell, connections: usize) -> Result<Self> {
        Self::with_strategies(value, connections, default_sequence(StdRng::from_os_rng()))
    }

    /// Create an engine whose random fallback is reproducible
    pub fn with_seed(value: Cell, connections: usize, seed: u64) -> Result<Self> {
        Self::with_strategies(value, connections, default_sequence(StdRng::seed_from_u64(seed)))
    }

    /// Create an engine with a custom strategy list, tried in order
    pub fn with_strategies(
        value: Cell,
        connections: usize,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self> {
        if value.is_empty() {
            return Err(GameError::InvalidState("engine must play X or O"));
        }
        Ok(Self {
            value,
            connections,
            strategies,
            status: StrategyState::Idle,
            on_status_change: None,
        })
    }

    /// Register a callback that receives every status change
    pub fn on_status_change(&mut self, hook: impl FnMut(StrategyState) + Send + 'static) {
        self.on_status_change = Some(Box::new(hook));
    }

    /// Choose a move for `board`.
    ///
    /// # Errors
    ///
    /// `NoMovesAvailable` if the board has no empty cell.
    pub fn think(&mut self, board: &Board) -> Result<Pos> {
        self.think_with_stats(board).map(|decision| decision.position)
    }

    /// Choose a move and report which strategy produced it.
    ///
    /// The status goes `Idle -> Thinking -> <strategy> -> Idle`; the tag that
    /// produced the move is kept in the returned [`Decision`].
    #[instrument(skip(self, board), fields(engine = %self.value, size = board.size()))]
    pub fn think_with_stats(&mut self, board: &Board) -> Result<Decision> {
        if board.empty_count() == 0 {
            return Err(GameError::NoMovesAvailable);
        }

        self.set_status(StrategyState::Thinking);

        let analysis = Analysis::observe(board, self.value, self.connections);
        let mut found = None;
        for strategy in self.strategies.iter_mut() {
            let Some(pos) = strategy.try_move(&analysis) else {
                continue;
            };
            // A strategy must never hand back an occupied or off-board cell
            if board.cell(pos.row, pos.col) == Some(Cell::Empty) {
                found = Some(Decision {
                    position: pos,
                    strategy: strategy.kind(),
                });
                break;
            }
        }

        match found {
            Some(decision) => {
                self.set_status(decision.strategy);
                debug!(pos = %decision.position, strategy = ?decision.strategy, "engine decided");
                self.set_status(StrategyState::Idle);
                Ok(decision)
            }
            None => {
                self.set_status(StrategyState::Idle);
                Err(GameError::InvalidState("no strategy produced a move"))
            }
        }
    }

    /// Forget the last decision and return to `Idle`
    pub fn erase_memory(&mut self) {
        self.set_status(StrategyState::Idle);
    }

    #[inline]
    pub fn status(&self) -> StrategyState {
        self.status
    }

    /// Value the engine plays
    #[inline]
    pub fn value(&self) -> Cell {
        self.value
    }

    #[inline]
    pub fn connections(&self) -> usize {
        self.connections
    }

    fn set_status(&mut self, status: StrategyState) {
        if self.status == status {
            return;
        }
        self.status = status;
        if let Some(hook) = self.on_status_change.as_mut() {
            hook(status);
        }
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("value", &self.value)
            .field("connections", &self.connections)
            .field("strategies", &self.strategies.len())
            .field("status", &self.status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, GameStatus};
    use crate::GameConfig;
    use std::sync::{Arc, Mutex};

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn engine(value: Cell, connections: usize) -> DecisionEngine {
        DecisionEngine::with_seed(value, connections, 17).unwrap()
    }

    #[test]
    fn test_takes_winning_move() {
        let b = board(&["XX.", "OO.", "..."]);
        let mut e = engine(Cell::O, 3);
        let decision = e.think_with_stats(&b).unwrap();
        assert_eq!(decision.position, Pos::new(1, 2));
        assert_eq!(decision.strategy, StrategyState::Win);
        assert_eq!(e.status(), StrategyState::Idle);
    }

    #[test]
    fn test_blocks_opponent() {
        let b = board(&["XX.", "O..", "..."]);
        let mut e = engine(Cell::O, 3);
        let decision = e.think_with_stats(&b).unwrap();
        assert_eq!(decision.position, Pos::new(0, 2));
        assert_eq!(decision.strategy, StrategyState::Block);
    }

    #[test]
    fn test_win_beats_block() {
        // O can win at (2,2) on the diagonal while X threatens (0,3)
        let b = board(&["OXX.", ".O..", "....", "X..."]);
        let mut e = engine(Cell::O, 3);
        let decision = e.think_with_stats(&b).unwrap();
        assert_eq!(decision.position, Pos::new(2, 2));
        assert_eq!(decision.strategy, StrategyState::Win);
    }

    #[test]
    fn test_proximity_when_no_threats() {
        let b = board(&["X..", ".O.", "..."]);
        let mut e = engine(Cell::O, 3);
        let decision = e.think_with_stats(&b).unwrap();
        assert_eq!(decision.position, Pos::new(0, 1));
        assert_eq!(decision.strategy, StrategyState::ProximityHeuristic);
    }

    #[test]
    fn test_random_on_first_move() {
        let b = board(&["...", ".X.", "..."]);
        let mut e = engine(Cell::O, 3);
        let decision = e.think_with_stats(&b).unwrap();
        assert_eq!(decision.strategy, StrategyState::Random);
        assert!(b.is_empty(decision.position));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let b = board(&["XOX", "OXX", "OXO"]);
        let mut e = engine(Cell::O, 3);
        assert_eq!(e.think(&b), Err(GameError::NoMovesAvailable));
        assert_eq!(e.status(), StrategyState::Idle);
    }

    #[test]
    fn test_board_is_not_modified() {
        let b = board(&["XX.", "O..", "..."]);
        let copy = b.clone();
        let mut e = engine(Cell::O, 3);
        e.think(&b).unwrap();
        assert_eq!(b, copy);
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(DecisionEngine::new(Cell::Empty, 3).is_err());
    }

    #[test]
    fn test_status_hook_sequence() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut e = engine(Cell::O, 3);
        e.on_status_change(move |status| sink.lock().unwrap().push(status));

        e.think(&board(&["XX.", "O..", "..."])).unwrap();
        assert_eq!(e.status(), StrategyState::Idle);
        e.think(&board(&["XX.", "OO.", "..."])).unwrap();
        assert_eq!(e.status(), StrategyState::Idle);
        e.erase_memory();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                StrategyState::Thinking,
                StrategyState::Block,
                StrategyState::Idle,
                StrategyState::Thinking,
                StrategyState::Win,
                StrategyState::Idle,
            ]
        );
    }

    #[test]
    fn test_custom_sequence_without_fallback() {
        let b = board(&["X..", "...", "..."]);
        let mut e = DecisionEngine::with_strategies(
            Cell::O,
            3,
            vec![Box::new(crate::strategy::ForkCreate)],
        )
        .unwrap();
        assert!(matches!(e.think(&b), Err(GameError::InvalidState(_))));
    }

    /// Engine moves are always legal across many seeded self-play games
    #[test]
    fn test_self_play_only_picks_empty_cells() {
        for seed in 0..40 {
            let size = 3 + (seed as usize % 5);
            let connections = 3 + (seed as usize % (size - 2));
            let config = GameConfig::new(size, connections, Cell::X).unwrap();
            let mut game = GameState::new(config);
            let mut x = DecisionEngine::with_seed(Cell::X, connections, seed).unwrap();
            let mut o = DecisionEngine::with_seed(Cell::O, connections, seed + 1000).unwrap();

            while game.status() == GameStatus::InProgress {
                let mover = if game.current_player() == Cell::X { &mut x } else { &mut o };
                let pos = mover.think(game.board()).unwrap();
                assert!(game.board().is_empty(pos));
                game.select(pos).unwrap();
            }
        }
    }

    /// Whenever the engine has a completing cell it takes one, even if the
    /// opponent also threatens.
    #[test]
    fn test_win_dominates_on_random_boards() {
        use rand::Rng;
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let size = rng.random_range(3..=6);
            let connections = rng.random_range(3..=size);
            let mut b = Board::new(size);
            for idx in 0..size * size {
                let roll: u8 = rng.random_range(0..3);
                let cell = [Cell::Empty, Cell::X, Cell::O][roll as usize];
                b.set(Pos::from_index(idx, size), cell);
            }
            // Skip full boards and boards where O has already won
            let already_won = b
                .positions_of(Cell::O)
                .into_iter()
                .any(|p| crate::rules::has_win_at(&b, p, Cell::O, connections));
            if b.empty_count() == 0 || already_won {
                continue;
            }
            let winning: Vec<Pos> = b
                .empty_positions()
                .into_iter()
                .filter(|&p| {
                    let mut trial = b.clone();
                    trial.set(p, Cell::O);
                    crate::rules::has_win_at(&trial, p, Cell::O, connections)
                })
                .collect();

            let mut e = engine(Cell::O, connections);
            let decision = e.think_with_stats(&b).unwrap();
            if winning.is_empty() {
                assert_ne!(decision.strategy, StrategyState::Win);
            } else {
                assert_eq!(decision.strategy, StrategyState::Win);
                assert!(winning.contains(&decision.position));
            }
        }
    }
}
