//! Board rendering for the Gomoku GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs from the game for one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub turn: Stone,
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    pub accepting_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    show_coordinates: bool,
    highlight_last_move: bool,
    show_hover_preview: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            show_coordinates: true,
            highlight_last_move: true,
            show_hover_preview: true,
        }
    }
}

impl BoardView {
    pub fn new(config: &crate::AppConfig) -> Self {
        Self {
            show_coordinates: config.show_coordinates,
            highlight_last_move: config.highlight_last_move,
            show_hover_preview: config.show_hover_preview,
            ..Self::default()
        }
    }

    /// Render the board and return the clicked position, if any.
    ///
    /// Clicks on occupied cells are still reported; the engine decides.
    pub fn show(&mut self, ui: &mut egui::Ui, frame: BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.layout(response.rect);

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(4),
            Stroke::new(2.0, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        if self.show_coordinates {
            self.draw_coordinates(&painter);
        }
        self.draw_stones(&painter, frame.board);

        if self.highlight_last_move {
            if let Some(pos) = frame.last_move {
                self.draw_last_move_marker(&painter, pos);
            }
        }

        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if !frame.accepting_input {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;

        if self.show_hover_preview {
            let color = if frame.board.is_empty(pos) {
                hover_valid(frame.turn == Stone::Black)
            } else {
                hover_invalid()
            };
            let radius = self.cell_size * STONE_RADIUS_RATIO;
            painter.circle_filled(self.board_to_screen(pos), radius, color);
        }

        if response.clicked() {
            Some(pos)
        } else {
            None
        }
    }

    /// Recompute cell size for a board drawn in `rect`
    fn layout(&mut self, rect: Rect) {
        self.board_rect = rect;
        self.cell_size = (rect.width() - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let far = BOARD_MARGIN + (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let min = self.board_rect.min;

            painter.line_segment(
                [min + Vec2::new(offset, BOARD_MARGIN), min + Vec2::new(offset, far)],
                stroke,
            );
            painter.line_segment(
                [min + Vec2::new(BOARD_MARGIN, offset), min + Vec2::new(far, offset)],
                stroke,
            );
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O, 15-1)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let letter = (b'A' + i as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + i as f32 * self.cell_size;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            }

            let num = (BOARD_SIZE - i).to_string();
            let y = self.board_rect.min.y + BOARD_MARGIN + i as f32 * self.cell_size;
            for x in [self.board_rect.min.x + 14.0, self.board_rect.max.x - 14.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &num, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (pos, stone) in board.placed_stones() {
            self.draw_stone(painter, pos, stone);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(center - Vec2::splat(radius * 0.3), radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Line through the winning run plus a ring around each stone
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        Pos::try_new(y.floor() as i32, x.floor() as i32)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
