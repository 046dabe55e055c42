//! Chain-building heuristic

use super::{Analysis, Strategy};
use crate::board::Pos;
use crate::engine::StrategyState;

/// Neighbour offsets `(row, col)` in the order they are tried.
///
/// Not a clean rotation: after the four cells from north round to south the
/// north-west cell comes before west and south-west. Tie-breaking depends on
/// this exact order.
pub const NEIGHBOR_ORDER: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Play next to one of the engine's own marks
#[derive(Debug, Clone, Copy, Default)]
pub struct Proximity;

impl Strategy for Proximity {
    fn kind(&self) -> StrategyState {
        StrategyState::ProximityHeuristic
    }

    fn try_move(&mut self, analysis: &Analysis) -> Option<Pos> {
        let board = analysis.board();
        analysis.own_positions().iter().find_map(|&pos| {
            NEIGHBOR_ORDER.iter().find_map(|&(dr, dc)| {
                pos.offset(dr, dc, board.size())
                    .filter(|&next| board.is_empty(next))
            })
        })
    }
}
