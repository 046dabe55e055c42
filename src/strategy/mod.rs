//! Move-selection strategies for the decision engine
//!
//! Each strategy inspects an [`Analysis`] of the board and either proposes
//! a move or declines. The engine asks them in a fixed priority order and
//! takes the first proposal:
//!
//! 1. [`WinNow`]: complete one of our own lines
//! 2. [`Block`]: fill the cell that would complete an opponent line
//! 3. [`ForkCreate`] / [`ForkBlock`]: reserved slots, currently decline
//! 4. [`Proximity`]: extend a chain next to one of our marks
//! 5. [`RandomFallback`]: any empty cell

mod fork;
mod line;
mod proximity;
mod random;

pub use fork::{ForkBlock, ForkCreate};
pub use line::{Block, WinNow};
pub use proximity::{Proximity, NEIGHBOR_ORDER};
pub use random::RandomFallback;

use crate::board::{Board, Cell, Pos};
use crate::engine::StrategyState;

/// A single step of the priority sequence
pub trait Strategy: Send {
    /// Tag reported when this strategy produces the move
    fn kind(&self) -> StrategyState;

    /// Propose an empty cell, or `None` to let the next strategy run
    fn try_move(&mut self, analysis: &Analysis) -> Option<Pos>;
}

/// Private snapshot of the board taken at the start of one decision.
///
/// Positions are listed in the order they were observed (row-major), which
/// fixes tie-breaking between equally good moves.
#[derive(Debug, Clone)]
pub struct Analysis {
    board: Board,
    own: Cell,
    connections: usize,
    own_positions: Vec<Pos>,
    opponent_positions: Vec<Pos>,
}

impl Analysis {
    /// Copy `board` and record where each side has played
    pub fn observe(board: &Board, own: Cell, connections: usize) -> Self {
        Self {
            board: board.clone(),
            own,
            connections,
            own_positions: board.positions_of(own),
            opponent_positions: board.positions_of(own.opponent()),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Value the engine plays
    #[inline]
    pub fn own(&self) -> Cell {
        self.own
    }

    #[inline]
    pub fn opponent(&self) -> Cell {
        self.own.opponent()
    }

    #[inline]
    pub fn connections(&self) -> usize {
        self.connections
    }

    #[inline]
    pub fn own_positions(&self) -> &[Pos] {
        &self.own_positions
    }

    #[inline]
    pub fn opponent_positions(&self) -> &[Pos] {
        &self.opponent_positions
    }
}

/// The standard priority sequence, with the random fallback driven by `rng`
pub fn default_sequence(rng: rand::rngs::StdRng) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(WinNow),
        Box::new(Block),
        Box::new(ForkCreate),
        Box::new(ForkBlock),
        Box::new(Proximity),
        Box::new(RandomFallback::new(rng)),
    ]
}
