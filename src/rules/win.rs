//! Win detection for N-in-a-row on an arbitrary square board
//!
//! Only the four lines through the last move are examined: its row, its
//! column, its diagonal and its anti-diagonal. Each line is split into
//! windows of exactly `connections` cells, and a window is scanned until it
//! either proves useful or is disqualified.
//!
//! The same scan serves two purposes:
//! - a window holding only the player's value is a completed win
//! - a window holding the player's value plus exactly one empty cell is an
//!   almost-complete line, and that empty cell is the completing move

use crate::board::{Board, Cell, Pos};

/// Line families through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal
    Row,
    /// Vertical
    Column,
    /// Top-left to bottom-right
    Diagonal,
    /// Bottom-left to top-right
    AntiDiagonal,
}

/// Scan order used by both win detection and move search
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Row,
    Direction::Column,
    Direction::Diagonal,
    Direction::AntiDiagonal,
];

/// A maximal line across the board, walked from `start` in steps of
/// `(d_row, d_col)` for `len` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    start: Pos,
    d_row: isize,
    d_col: isize,
    len: usize,
}

impl Line {
    /// The full line of the given family passing through `pos`.
    ///
    /// Diagonals are anchored at their own start cell: for the diagonal that
    /// is `min(row, col)` steps up-left, for the anti-diagonal it is
    /// `min(col, size - 1 - row)` steps down-left. The line length shrinks by
    /// the distance of that start cell from the primary (longest) line.
    ///
    /// `pos` must lie on a board of side `size`.
    pub(crate) fn through(size: usize, pos: Pos, direction: Direction) -> Line {
        debug_assert!(pos.row < size && pos.col < size, "{pos} is off a {size}x{size} board");
        match direction {
            Direction::Row => Line {
                start: Pos::new(pos.row, 0),
                d_row: 0,
                d_col: 1,
                len: size,
            },
            Direction::Column => Line {
                start: Pos::new(0, pos.col),
                d_row: 1,
                d_col: 0,
                len: size,
            },
            Direction::Diagonal => {
                let sub = pos.row.min(pos.col);
                let start = Pos::new(pos.row - sub, pos.col - sub);
                // One of the start coordinates is always zero
                let dist_from_primary = start.row + start.col;
                Line {
                    start,
                    d_row: 1,
                    d_col: 1,
                    len: size - dist_from_primary,
                }
            }
            Direction::AntiDiagonal => {
                let dist_from_bottom = size - 1 - pos.row;
                let sub = pos.col.min(dist_from_bottom);
                let start = Pos::new(pos.row + sub, pos.col - sub);
                let dist_from_primary = (start.row + start.col).abs_diff(size - 1);
                Line {
                    start,
                    d_row: -1,
                    d_col: 1,
                    len: size - dist_from_primary,
                }
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th cell along the line; `i` must be below `len`
    #[inline]
    pub fn cell(&self, i: usize) -> Pos {
        debug_assert!(i < self.len);
        let i = i as isize;
        Pos::new(
            (self.start.row as isize + self.d_row * i) as usize,
            (self.start.col as isize + self.d_col * i) as usize,
        )
    }

    /// Number of windows of `connections` cells that fit on this line.
    ///
    /// Zero when the line is shorter than a window, so callers never index
    /// past its end.
    #[inline]
    pub fn window_count(&self, connections: usize) -> usize {
        if connections == 0 {
            return 0;
        }
        self.len
            .checked_sub(connections)
            .map_or(0, |spare| spare + 1)
    }

    /// Positions covered by the window starting at `offset`
    pub fn window(&self, offset: usize, connections: usize) -> Vec<Pos> {
        (offset..offset + connections).map(|i| self.cell(i)).collect()
    }
}

/// Outcome of scanning one window for a player value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowScan {
    /// Every cell holds the value
    Complete,
    /// All but one cell hold the value; the remaining cell is empty
    Completes(Pos),
    /// An opposing cell or a second empty cell was found
    Disqualified,
}

/// Scan the window starting at `offset` on `line`.
///
/// Stops at the first opposing cell or the second empty cell.
pub fn scan_window(
    board: &Board,
    line: &Line,
    offset: usize,
    connections: usize,
    value: Cell,
) -> WindowScan {
    let mut empty = None;
    for i in offset..offset + connections {
        let pos = line.cell(i);
        let cell = board.get(pos);
        if cell == value {
            continue;
        }
        if cell != Cell::Empty || empty.is_some() {
            return WindowScan::Disqualified;
        }
        empty = Some(pos);
    }
    match empty {
        None => WindowScan::Complete,
        Some(pos) => WindowScan::Completes(pos),
    }
}

/// Iterate window scans along every line through `pos`, in direction order
/// then window order, stopping at the first `Some` returned by `visit`.
fn scan_lines_through<T>(
    board: &Board,
    pos: Pos,
    value: Cell,
    connections: usize,
    mut visit: impl FnMut(&Line, usize, WindowScan) -> Option<T>,
) -> Option<T> {
    if value == Cell::Empty || !board.contains(pos.row, pos.col) {
        return None;
    }
    for direction in DIRECTIONS {
        let line = Line::through(board.size(), pos, direction);
        for offset in 0..line.window_count(connections) {
            let scan = scan_window(board, &line, offset, connections, value);
            if let Some(found) = visit(&line, offset, scan) {
                return Some(found);
            }
        }
    }
    None
}

/// Check whether any line through `pos` holds `connections` consecutive
/// cells equal to `value`.
///
/// Longer runs also count since they contain a full window.
pub fn has_win_at(board: &Board, pos: Pos, value: Cell, connections: usize) -> bool {
    scan_lines_through(board, pos, value, connections, |_, _, scan| {
        (scan == WindowScan::Complete).then_some(())
    })
    .is_some()
}

/// Winner decided by the move just played at `last_move`, if any
pub fn check_winner(board: &Board, last_move: Pos, connections: usize) -> Option<Cell> {
    let value = board.cell(last_move.row, last_move.col)?;
    has_win_at(board, last_move, value, connections).then_some(value)
}

/// Positions of the first completed window through `pos`
pub fn winning_line(
    board: &Board,
    pos: Pos,
    value: Cell,
    connections: usize,
) -> Option<Vec<Pos>> {
    scan_lines_through(board, pos, value, connections, |line, offset, scan| {
        (scan == WindowScan::Complete).then(|| line.window(offset, connections))
    })
}

/// Find the empty cell that would complete an almost-complete line through
/// `pos` for `value`.
///
/// Rows are searched before columns, then diagonals, then anti-diagonals;
/// within a line, windows are taken from its start cell onward.
pub fn find_completing_move(
    board: &Board,
    pos: Pos,
    value: Cell,
    connections: usize,
) -> Option<Pos> {
    scan_lines_through(board, pos, value, connections, |_, _, scan| match scan {
        WindowScan::Completes(empty) => Some(empty),
        _ => None,
    })
}
