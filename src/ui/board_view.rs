//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are reported even on occupied cells; the controller decides
    /// whether the move is legal.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accepting_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);

        if let Some(line) = winning_line {
            self.draw_winning_cells(&painter, &line);
        }

        self.draw_marks(&painter, board);

        if let Some(idx) = last_move {
            self.draw_last_move_marker(&painter, idx);
        }

        let mut clicked = None;
        if let Some(pointer_pos) = response.hover_pos() {
            if let Some(idx) = self.screen_to_board(pointer_pos) {
                if accepting_input && board.is_empty(idx) {
                    self.draw_hover_preview(&painter, idx);
                }
                if response.clicked() {
                    clicked = Some(idx);
                }
            }
        }

        clicked
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for idx in 0..TOTAL_CELLS {
            if let Cell::Mark(player) = board.get(idx) {
                self.draw_mark(painter, idx, player);
            }
        }
    }

    /// X as two strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, idx: usize, player: Player) {
        let center = self.cell_center(idx);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match player {
            Player::Human => {
                let stroke = Stroke::new(MARK_STROKE_WIDTH, MARK_X);
                let d = Vec2::splat(radius);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(radius, -radius), center + Vec2::new(-radius, radius)],
                    stroke,
                );
            }
            Player::Computer => {
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE_WIDTH, MARK_O));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, idx: usize) {
        let rect = self.cell_rect(idx);
        let corner = rect.right_top() + Vec2::new(-12.0, 12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_cells(&self, painter: &Painter, line: &[usize; 3]) {
        let fill = WIN_HIGHLIGHT.gamma_multiply(0.25);
        for &idx in line {
            painter.rect_filled(self.cell_rect(idx).shrink(6.0), CornerRadius::same(6), fill);
        }
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(line[0]), self.cell_center(line[2])], stroke);
    }

    fn draw_hover_preview(&self, painter: &Painter, idx: usize) {
        painter.rect_filled(self.cell_rect(idx).shrink(6.0), CornerRadius::same(6), hover_valid());
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8).to_index())
        } else {
            None
        }
    }

    fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, idx: usize) -> Pos2 {
        self.cell_rect(idx).center()
    }
}
