//! Fork strategies
//!
//! A fork is a move that opens two almost-complete lines at once. Finding or
//! preventing one needs look-ahead, so both slots currently decline and the
//! sequence falls through to [`Proximity`](super::Proximity). They stay in
//! the sequence so that a real detector can be dropped in without changing
//! priority order or reported status.

use super::{Analysis, Strategy};
use crate::board::Pos;
use crate::engine::StrategyState;

/// Create a fork for the engine. Always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForkCreate;

impl Strategy for ForkCreate {
    fn kind(&self) -> StrategyState {
        StrategyState::ForkCreate
    }

    fn try_move(&mut self, _analysis: &Analysis) -> Option<Pos> {
        None
    }
}

/// Break up an opponent fork. Always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForkBlock;

impl Strategy for ForkBlock {
    fn kind(&self) -> StrategyState {
        StrategyState::ForkBlock
    }

    fn try_move(&mut self, _analysis: &Analysis) -> Option<Pos> {
        None
    }
}
