//! GUI module for the game
//!
//! A thin egui/eframe front-end over [`GameState`](crate::GameState) and
//! [`DecisionEngine`](crate::DecisionEngine).

mod app;
mod board_view;
mod session;
mod theme;

pub use app::SuperTicTacToeApp;
pub use session::{GameMode, Session};
