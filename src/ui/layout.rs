use ratatui::layout::Rect;

use crate::game::{COLS, ROWS};

/// A terminal row is roughly twice as tall as a column is wide, so vertical
/// space is measured in half-rows when sizing the discs.
pub const ROW_ASPECT: u16 = 2;

/// Screen placement of the board, recomputed whenever the terminal is resized.
///
/// All coordinates are absolute terminal cells. `diameter` is the width of one
/// board cell in columns; its height in rows is `diameter / ROW_ASPECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub diameter: u16,
    pub x_margin: u16,
    pub y_margin: u16,
}

impl Geometry {
    /// Fit the largest square-looking grid into `area` and centre it.
    pub fn new(area: Rect) -> Self {
        let diameter =
            (area.width / COLS as u16).min(area.height.saturating_mul(ROW_ASPECT) / ROWS as u16);
        let cell_height = diameter / ROW_ASPECT;
        Geometry {
            diameter,
            x_margin: area.x + (area.width - diameter * COLS as u16) / 2,
            y_margin: area.y + (area.height - cell_height * ROWS as u16) / 2,
        }
    }

    /// Height of one board cell in terminal rows.
    pub fn cell_height(&self) -> u16 {
        self.diameter / ROW_ASPECT
    }

    /// Whether the area was large enough to draw every cell.
    pub fn is_drawable(&self) -> bool {
        self.cell_height() > 0
    }

    /// Column under screen x, or `None` for clicks in the margins.
    pub fn column_at(&self, x: u16) -> Option<usize> {
        if self.diameter == 0 || x < self.x_margin {
            return None;
        }
        let col = ((x - self.x_margin) / self.diameter) as usize;
        (col < COLS).then_some(col)
    }

    /// Screen rectangle of a board cell. Row 0 is drawn at the bottom.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let height = self.cell_height();
        Rect {
            x: self.x_margin + col as u16 * self.diameter,
            y: self.y_margin + (ROWS - 1 - row) as u16 * height,
            width: self.diameter,
            height,
        }
    }

    /// Screen rectangle covering the whole grid.
    pub fn board_rect(&self) -> Rect {
        Rect {
            x: self.x_margin,
            y: self.y_margin,
            width: self.diameter * COLS as u16,
            height: self.cell_height() * ROWS as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diameter_limited_by_width() {
        // 70 wide allows 10 per column; 60 rows allow 20 half-rows per row
        let geometry = Geometry::new(Rect::new(0, 0, 70, 60));
        assert_eq!(geometry.diameter, 10);
        assert_eq!(geometry.x_margin, 0);
        assert_eq!(geometry.cell_height(), 5);
        assert_eq!(geometry.y_margin, 15);
    }

    #[test]
    fn test_diameter_limited_by_height() {
        // 12 rows = 24 half-rows = 4 per board row
        let geometry = Geometry::new(Rect::new(0, 0, 100, 12));
        assert_eq!(geometry.diameter, 4);
        assert_eq!(geometry.x_margin, (100 - 28) / 2);
        assert_eq!(geometry.cell_height(), 2);
        assert_eq!(geometry.y_margin, 0);
    }

    #[test]
    fn test_margins_include_area_origin() {
        let geometry = Geometry::new(Rect::new(5, 3, 70, 60));
        assert_eq!(geometry.x_margin, 5);
        assert_eq!(geometry.y_margin, 18);
    }

    #[test]
    fn test_column_at() {
        let geometry = Geometry::new(Rect::new(0, 0, 100, 12));
        // x_margin = 36, diameter = 4
        assert_eq!(geometry.column_at(35), None);
        assert_eq!(geometry.column_at(36), Some(0));
        assert_eq!(geometry.column_at(39), Some(0));
        assert_eq!(geometry.column_at(40), Some(1));
        assert_eq!(geometry.column_at(36 + 4 * 7 - 1), Some(6));
        assert_eq!(geometry.column_at(36 + 4 * 7), None);
    }

    #[test]
    fn test_column_at_with_zero_diameter() {
        let geometry = Geometry::new(Rect::new(0, 0, 6, 40));
        assert_eq!(geometry.diameter, 0);
        assert_eq!(geometry.column_at(0), None);
        assert!(!geometry.is_drawable());
    }

    #[test]
    fn test_cell_rect_puts_row_zero_at_bottom() {
        let geometry = Geometry::new(Rect::new(0, 0, 70, 30));
        let board = geometry.board_rect();
        let bottom_left = geometry.cell_rect(0, 0);
        let top_right = geometry.cell_rect(ROWS - 1, COLS - 1);

        assert_eq!(bottom_left.x, board.x);
        assert_eq!(bottom_left.bottom(), board.bottom());
        assert_eq!(top_right.y, board.y);
        assert_eq!(top_right.right(), board.right());
    }
}
