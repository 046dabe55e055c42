//! Main application for the Super Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use super::board_view::BoardView;
use super::session::{GameMode, Session};
use super::theme::*;
use crate::{GameConfig, GameStatus, StrategyState};

/// Main Super Tic-Tac-Toe application
pub struct SuperTicTacToeApp {
    session: Session,
    config: GameConfig,
    seed: Option<u64>,
    board_view: BoardView,
}

impl SuperTicTacToeApp {
    /// Create the app around an already configured session
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session, config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            session,
            config,
            seed,
            board_view: BoardView::default(),
        }
    }

    /// Replace the session with a fresh one using the same board settings
    fn new_game(&mut self, vs_engine: bool) {
        match Session::new(self.config, vs_engine, self.seed) {
            Ok(session) => self.session = session,
            Err(err) => {
                warn!(%err, "could not start a new game");
                self.session.message = Some(err.to_string());
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Engine)").clicked() {
                        self.new_game(true);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(false);
                        ui.close_menu();
                    }
                    if ui.button("Play Again (N)").clicked() {
                        self.session.play_again();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human } => format!("PvE - You: {human}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(format!(
                        "{}x{}, {} to win | {}",
                        self.config.size(),
                        self.config.size(),
                        self.config.connections(),
                        mode_text
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if matches!(self.session.mode, GameMode::PvE { .. }) {
                    self.render_engine_card(ui);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if self.session.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new("SUPER TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{} in a row", self.config.connections()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.game.current_player();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, PANEL_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(28.0),
                    mark_color(turn),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{turn} to move")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        match self.session.mode {
                            GameMode::PvE { human } if human == turn => ("Your turn", STATUS_OK),
                            GameMode::PvE { .. } => ("Engine to move", STATUS_WARNING),
                            GameMode::PvP => ("Hotseat", STATUS_OK),
                        }
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render the engine's last decision
    fn render_engine_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            // Idle between calls; the reason is kept in the decision
            let state = self
                .session
                .last_decision
                .map_or_else(|| self.session.engine_status().unwrap_or_default(), |d| d.strategy);
            ui.label(
                RichText::new(strategy_label(state))
                    .size(14.0)
                    .strong()
                    .color(STATUS_OK),
            );

            if let Some(decision) = self.session.last_decision {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Played {}", decision.position))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            }
            if let Some(time) = self.session.engine_time {
                ui.label(
                    RichText::new(format!("{} us", time.as_micros()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                        .clicked()
                    {
                        self.session.undo();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.game.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, accent) = match self.session.game.status() {
            GameStatus::Won(winner) => (format!("{winner} WINS!"), mark_color(winner)),
            _ => ("DRAW".to_string(), TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(accent));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(RichText::new("Play Again").size(14.0).strong().color(TEXT_PRIMARY))
                                        .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.session.play_again();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("!").size(14.0).strong().color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.session.game.winning_line();
            let game = &self.session.game;

            let clicked = self.board_view.show(
                ui,
                game.board(),
                game.current_player(),
                game.last_move(),
                winning_line.as_deref(),
                game.status().is_over(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.session.try_select(pos) {
                    warn!(%err, "move rejected");
                    self.session.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, again) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));
        if undo {
            self.session.undo();
        }
        if again {
            self.session.play_again();
        }
    }
}

fn strategy_label(state: StrategyState) -> &'static str {
    match state {
        StrategyState::Idle => "Idle",
        StrategyState::Thinking => "Thinking",
        StrategyState::Win => "Completed a line",
        StrategyState::Block => "Blocked a line",
        StrategyState::ForkCreate => "Created a fork",
        StrategyState::ForkBlock => "Blocked a fork",
        StrategyState::ProximityHeuristic => "Played near own mark",
        StrategyState::Random => "Random cell",
    }
}

impl eframe::App for SuperTicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
