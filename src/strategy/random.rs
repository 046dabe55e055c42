//! Last-resort move selection

use rand::rngs::StdRng;
use rand::Rng;

use super::{Analysis, Strategy};
use crate::board::Pos;
use crate::engine::StrategyState;

/// Pick uniformly among the empty cells.
///
/// Declines only on a full board, which the engine rules out before asking.
#[derive(Debug, Clone)]
pub struct RandomFallback {
    rng: StdRng,
}

impl RandomFallback {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomFallback {
    fn kind(&self) -> StrategyState {
        StrategyState::Random
    }

    fn try_move(&mut self, analysis: &Analysis) -> Option<Pos> {
        let empty = analysis.board().empty_positions();
        if empty.is_empty() {
            return None;
        }
        Some(empty[self.rng.random_range(0..empty.len())])
    }
}
