//! Game session driving the GUI
//!
//! Couples a [`GameState`] with an optional [`DecisionEngine`] and keeps the
//! bits of presentation state the panels need.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{Cell, Decision, DecisionEngine, GameConfig, GameError, GameState, GameStatus, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs engine; the human always opens
    PvE { human: Cell },
    /// Player vs Player (hotseat)
    PvP,
}

/// Main session state
pub struct Session {
    pub game: GameState,
    pub mode: GameMode,
    pub last_decision: Option<Decision>,
    pub engine_time: Option<Duration>,
    pub message: Option<String>,
    engine: Option<DecisionEngine>,
}

impl Session {
    /// Start a session. In PvE the engine plays the value opposite the starter.
    pub fn new(config: GameConfig, vs_engine: bool, seed: Option<u64>) -> crate::Result<Self> {
        let (mode, engine) = if vs_engine {
            let value = config.starter().opponent();
            let engine = match seed {
                Some(seed) => DecisionEngine::with_seed(value, config.connections(), seed)?,
                None => DecisionEngine::new(value, config.connections())?,
            };
            (
                GameMode::PvE {
                    human: config.starter(),
                },
                Some(engine),
            )
        } else {
            (GameMode::PvP, None)
        };

        Ok(Self {
            game: GameState::new(config),
            mode,
            last_decision: None,
            engine_time: None,
            message: None,
            engine,
        })
    }

    pub fn is_over(&self) -> bool {
        self.game.status().is_over()
    }

    pub fn engine_status(&self) -> Option<crate::StrategyState> {
        self.engine.as_ref().map(DecisionEngine::status)
    }

    /// Play a human move, then let the engine answer if the game goes on
    pub fn try_select(&mut self, pos: Pos) -> Result<(), GameError> {
        self.game.select(pos)?;
        self.message = None;

        if self.game.status() == GameStatus::InProgress {
            self.engine_reply()?;
        }
        Ok(())
    }

    fn engine_reply(&mut self) -> Result<(), GameError> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        let start = Instant::now();
        let decision = engine.think_with_stats(self.game.board())?;
        self.engine_time = Some(start.elapsed());
        self.last_decision = Some(decision);
        self.game.select(decision.position)?;
        Ok(())
    }

    fn human_to_move(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.game.current_player() == human,
            GameMode::PvP => true,
        }
    }

    /// Undo the last turn. In PvE moves are taken back until it is the
    /// human's turn again, so an engine reply goes together with the human
    /// move before it.
    pub fn undo(&mut self) {
        let mut count = 0;
        loop {
            if let Err(err) = self.game.undo() {
                warn!(%err, "undo rejected");
                self.message = Some(err.to_string());
                return;
            }
            count += 1;
            if self.human_to_move() || self.game.history().is_empty() {
                break;
            }
        }
        self.last_decision = None;
        self.message = None;
        debug!(moves = count, "turn undone");
    }

    /// Clear the board for a rematch
    pub fn play_again(&mut self) {
        if let Err(err) = self.game.reset() {
            self.message = Some(err.to_string());
            return;
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.erase_memory();
        }
        self.last_decision = None;
        self.engine_time = None;
        self.message = None;
    }
}
