//! Strategies built on the almost-complete line scan

use super::{Analysis, Strategy};
use crate::board::{Cell, Pos};
use crate::engine::StrategyState;
use crate::rules::find_completing_move;

/// First completing cell found from any of `seeds`, scanned in order
fn completing_move(analysis: &Analysis, seeds: &[Pos], value: Cell) -> Option<Pos> {
    seeds.iter().find_map(|&seed| {
        find_completing_move(analysis.board(), seed, value, analysis.connections())
    })
}

/// Complete one of the engine's own lines
#[derive(Debug, Clone, Copy, Default)]
pub struct WinNow;

impl Strategy for WinNow {
    fn kind(&self) -> StrategyState {
        StrategyState::Win
    }

    fn try_move(&mut self, analysis: &Analysis) -> Option<Pos> {
        completing_move(analysis, analysis.own_positions(), analysis.own())
    }
}

/// Claim the cell that would complete an opponent line
#[derive(Debug, Clone, Copy, Default)]
pub struct Block;

impl Strategy for Block {
    fn kind(&self) -> StrategyState {
        StrategyState::Block
    }

    fn try_move(&mut self, analysis: &Analysis) -> Option<Pos> {
        completing_move(analysis, analysis.opponent_positions(), analysis.opponent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn analysis(rows: &[&str], own: Cell, connections: usize) -> Analysis {
        Analysis::observe(&Board::from_rows(rows).unwrap(), own, connections)
    }

    #[test]
    fn test_win_now_finds_own_row() {
        let a = analysis(&["XX.", "OO.", "..."], Cell::O, 3);
        assert_eq!(WinNow.try_move(&a), Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_win_now_declines_without_threat() {
        let a = analysis(&["XX.", "O..", "..."], Cell::O, 3);
        assert_eq!(WinNow.try_move(&a), None);
    }

    #[test]
    fn test_block_finds_opponent_row() {
        let a = analysis(&["XX.", "O..", "..."], Cell::O, 3);
        assert_eq!(Block.try_move(&a), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_block_uses_first_observed_opponent_mark() {
        // X threatens (0,2) via row 0 and (2,0) via column 0; (0,0) is seen first
        let a = analysis(&["XX.", "X.O", ".O."], Cell::O, 3);
        assert_eq!(Block.try_move(&a), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_win_now_on_diagonal_gap() {
        let a = analysis(&["O....", ".....", "..O..", "...O.", "....."], Cell::O, 4);
        assert_eq!(WinNow.try_move(&a), Some(Pos::new(1, 1)));
    }
}
