//! Game rules for N-in-a-row
//!
//! Win detection is local to the last move, so a move costs work
//! proportional to the board side times the win length instead of a
//! full-board rescan.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_winner, find_completing_move, has_win_at, scan_window, winning_line, Direction, Line,
    WindowScan, DIRECTIONS,
};
