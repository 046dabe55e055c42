//! Board rendering for the GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::{Board, Cell, Pos};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board side in cells
    size: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            size: 3,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Cell,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.size = board.size().max(1);
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.is_empty(board_pos);
                    self.draw_hover_preview(&painter, board_pos, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let span = self.cell_size * self.size as f32;

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)],
                stroke,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (row, cells) in board.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if !cell.is_empty() {
                    self.draw_mark(painter, Pos::new(row, col), cell, mark_color(cell));
                }
            }
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, cell: Cell, color: egui::Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        match cell {
            Cell::X => {
                let d = Vec2::splat(radius);
                let e = Vec2::new(radius, -radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment([center - e, center + e], stroke);
            }
            Cell::O => {
                painter.circle_stroke(center, radius, stroke);
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.board_to_screen(pos) + Vec2::splat(self.cell_size * 0.38);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            return;
        };
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(first), self.board_to_screen(last)], stroke);

        for &pos in line {
            let radius = self.cell_size * MARK_RATIO + 6.0;
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Cell, is_valid: bool) {
        if is_valid {
            self.draw_mark(painter, pos, turn, hover_valid());
        } else {
            let center = self.board_to_screen(pos);
            painter.circle_filled(center, self.cell_size * MARK_RATIO, hover_invalid());
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        (row < self.size && col < self.size).then(|| Pos::new(row, col))
    }

    /// Centre of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
