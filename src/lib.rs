//! Super Tic-Tac-Toe: N-in-a-row with a heuristic opponent
//!
//! A generalised tic-tac-toe engine:
//! - Square board with a side of 3 to 14
//! - Configurable number of connections to win (3 up to the board side)
//! - Win detection local to the last move (row, column, both diagonals)
//! - Heuristic opponent with a fixed strategy priority
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Cells, positions and the grid
//! - [`rules`]: Window-based win detection
//! - [`game`]: Turn state machine with undo and reset
//! - [`strategy`]: Move-selection strategies
//! - [`engine`]: Decision engine running the strategies in order
//! - [`config`]: Validated game settings
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use super_tictactoe::{Cell, DecisionEngine, GameConfig, GameState, GameStatus, Pos};
//!
//! let config = GameConfig::new(5, 4, Cell::X).unwrap();
//! let mut game = GameState::new(config);
//! let mut engine = DecisionEngine::with_seed(Cell::O, game.connections(), 7).unwrap();
//!
//! // Human plays X, engine answers as O
//! game.select(Pos::new(2, 2)).unwrap();
//! if game.status() == GameStatus::InProgress {
//!     let reply = engine.think(game.board()).unwrap();
//!     game.select(reply).unwrap();
//! }
//! assert_eq!(game.history().len(), 2);
//! ```
//!
//! # Strategy Priority
//!
//! The engine picks its move from the first strategy that proposes one:
//! 1. Complete its own line
//! 2. Block the opponent's line
//! 3. Create or block a fork (reserved, always declines)
//! 4. Play next to one of its own marks
//! 5. Random empty cell

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod strategy;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{Decision, DecisionEngine, StrategyState};
pub use error::{GameError, Result};
pub use game::{GameState, GameStatus};
