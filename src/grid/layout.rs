//! Table geometry shared by rendering and hit-testing
//!
//! Everything here is a pure function of the table, the viewport and the
//! window metrics, so a pixel the renderer paints for a cell maps back to the
//! same cell when clicked.

use super::store::CellPosition;
use super::table::Table;
use super::viewport::Viewport;

/// Vertical padding added to the line height for each table row
pub const ROW_PADDING: usize = 6;
/// Vertical padding added to the line height for the menu and status bars
pub const BAR_PADDING: usize = 8;
/// Minimum digits reserved in the row-number gutter
const MIN_GUTTER_DIGITS: usize = 2;

/// Pixel rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x as f64
            && px < (self.x + self.width) as f64
            && py >= self.y as f64
            && py < (self.y + self.height) as f64
    }
}

/// Window and font measurements in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub width: usize,
    pub height: usize,
    pub line_height: usize,
    pub char_width: f32,
    /// Width of every column, already scaled for the display
    pub column_width: usize,
}

impl LayoutMetrics {
    pub fn row_height(&self) -> usize {
        self.line_height + ROW_PADDING
    }

    pub fn menu_bar_height(&self) -> usize {
        self.line_height + BAR_PADDING
    }

    pub fn status_bar_height(&self) -> usize {
        self.line_height + BAR_PADDING
    }

    /// Rectangle of the status bar along the bottom edge
    pub fn status_bar_rect(&self) -> Rect {
        let h = self.status_bar_height();
        Rect::new(0, self.height.saturating_sub(h), self.width, h)
    }
}

/// Computed table geometry for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Width of the row-number gutter
    pub gutter_width: usize,
    /// X where the first visible column starts
    pub grid_x: usize,
    /// Y of the heading row, `None` while folded
    pub heading_y: Option<usize>,
    /// Y where data rows start
    pub data_y: usize,
    /// Y where the data area ends (top of the status bar)
    pub data_bottom: usize,
    pub row_height: usize,
    pub column_width: usize,
    /// Visible rows as (row index, y)
    pub visible_rows: Vec<(usize, usize)>,
    /// Visible columns as (column index, x)
    pub visible_columns: Vec<(usize, usize)>,
    /// Rows that fit completely
    pub full_rows: usize,
    /// Columns that fit completely
    pub full_cols: usize,
    top_row: usize,
    row_count: usize,
}

impl TableLayout {
    /// Lay out `table` as seen through `viewport`
    pub fn calculate(table: &Table, viewport: &Viewport, metrics: &LayoutMetrics) -> Self {
        let row_height = metrics.row_height().max(1);
        let column_width = metrics.column_width.max(1);
        let row_count = table.row_count();
        let column_count = table.column_count();

        let digits = row_count.max(1).to_string().len().max(MIN_GUTTER_DIGITS);
        let gutter_width = (digits as f32 * metrics.char_width).ceil() as usize + 12;
        let grid_x = gutter_width;

        let table_top = metrics.menu_bar_height();
        let heading_y = (!table.is_folded()).then_some(table_top);
        let data_y = table_top + if heading_y.is_some() { row_height } else { 0 };
        let data_bottom = metrics
            .height
            .saturating_sub(metrics.status_bar_height())
            .max(data_y);

        let full_rows = (data_bottom - data_y) / row_height;
        let full_cols = metrics.width.saturating_sub(grid_x) / column_width;

        let mut visible_rows = Vec::new();
        let mut y = data_y;
        let mut row = viewport.top_row;
        while y < data_bottom && row < row_count {
            visible_rows.push((row, y));
            y += row_height;
            row += 1;
        }

        let mut visible_columns = Vec::new();
        let mut x = grid_x;
        let mut col = viewport.left_col;
        while x < metrics.width && col < column_count {
            visible_columns.push((col, x));
            x += column_width;
            col += 1;
        }

        Self {
            gutter_width,
            grid_x,
            heading_y,
            data_y,
            data_bottom,
            row_height,
            column_width,
            visible_rows,
            visible_columns,
            full_rows,
            full_cols,
            top_row: viewport.top_row,
            row_count,
        }
    }

    /// X extent of the drawn grid (right edge of the last visible column)
    pub fn grid_right(&self) -> usize {
        self.visible_columns
            .last()
            .map(|&(_, x)| x + self.column_width)
            .unwrap_or(self.grid_x)
    }

    fn column_at(&self, x: f64) -> Option<usize> {
        self.visible_columns
            .iter()
            .find(|&&(_, cx)| x >= cx as f64 && x < (cx + self.column_width) as f64)
            .map(|&(col, _)| col)
    }

    /// Column whose heading is under `(x, y)`
    pub fn heading_at(&self, x: f64, y: f64) -> Option<usize> {
        let hy = self.heading_y? as f64;
        if y < hy || y >= hy + self.row_height as f64 {
            return None;
        }
        self.column_at(x)
    }

    /// Data cell under `(x, y)`; `None` outside the grid or past the last
    /// row or column
    pub fn cell_at(&self, x: f64, y: f64) -> Option<CellPosition> {
        if y < self.data_y as f64 || y >= self.data_bottom as f64 {
            return None;
        }
        let row = self.top_row + ((y - self.data_y as f64) / self.row_height as f64) as usize;
        if row >= self.row_count {
            return None;
        }
        let col = self.column_at(x)?;
        Some(CellPosition::new(row, col))
    }

    /// Screen rectangle of a cell, if it is on screen
    pub fn cell_rect(&self, position: CellPosition) -> Option<Rect> {
        let &(_, y) = self
            .visible_rows
            .iter()
            .find(|&&(row, _)| row == position.row)?;
        let &(_, x) = self
            .visible_columns
            .iter()
            .find(|&&(col, _)| col == position.col)?;
        Some(Rect::new(x, y, self.column_width, self.row_height))
    }

    /// Screen rectangle of a heading, if it is on screen
    pub fn heading_rect(&self, col: usize) -> Option<Rect> {
        let y = self.heading_y?;
        let &(_, x) = self.visible_columns.iter().find(|&&(c, _)| c == col)?;
        Some(Rect::new(x, y, self.column_width, self.row_height))
    }
}
