use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::Geometry;
use crate::game::{Board, Cell, COLS, ROWS};

pub const BACKGROUND: Color = Color::Blue;

/// Squared radius of a disc relative to its cell, leaving a rim of background.
const DISC_RADIUS_SQ: f32 = 0.81;

/// Colour of a disc for a cell state.
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::White,
        Cell::PlayerOne => Color::Red,
        Cell::PlayerTwo => Color::Black,
    }
}

/// Draws the grid as filled discs on a blue background.
pub struct BoardWidget<'a> {
    board: &'a Board,
    geometry: Geometry,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, geometry: Geometry) -> Self {
        BoardWidget { board, geometry }
    }

    fn draw_disc(&self, rect: Rect, color: Color, buf: &mut Buffer) {
        let style = Style::default().fg(color).bg(BACKGROUND);
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                if !in_disc(dx, dy, rect.width, rect.height) {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((rect.x + dx, rect.y + dy)) {
                    cell.set_symbol("█").set_style(style);
                }
            }
        }
    }
}

/// Whether the sub-cell (dx, dy) of a `width` x `height` cell lies inside its disc.
fn in_disc(dx: u16, dy: u16, width: u16, height: u16) -> bool {
    let nx = (dx as f32 + 0.5) / width as f32 * 2.0 - 1.0;
    let ny = (dy as f32 + 0.5) / height as f32 * 2.0 - 1.0;
    nx * nx + ny * ny <= DISC_RADIUS_SQ
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(BACKGROUND));
        if !self.geometry.is_drawable() {
            return;
        }

        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.board.get(row, col).unwrap_or_default();
                let rect = self.geometry.cell_rect(row, col).intersection(area);
                self.draw_disc(rect, cell_color(cell), buf);
            }
        }
    }
}
