//! Visible window into the table

/// First visible row/column and how many fit on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row (0-indexed)
    pub top_row: usize,
    /// First visible column (0-indexed)
    pub left_col: usize,
    /// Number of rows that fit in the data area
    pub visible_rows: usize,
    /// Number of columns that fit completely in the data area
    pub visible_cols: usize,
}

impl Viewport {
    pub fn new(visible_rows: usize, visible_cols: usize) -> Self {
        Self {
            top_row: 0,
            left_col: 0,
            visible_rows,
            visible_cols,
        }
    }

    /// Scroll so that `(row, col)` is on screen
    pub fn ensure_visible(&mut self, row: usize, col: usize, total_rows: usize, total_cols: usize) {
        if row < self.top_row {
            self.top_row = row;
        } else if self.visible_rows > 0 && row >= self.top_row + self.visible_rows {
            self.top_row = row + 1 - self.visible_rows;
        }

        if col < self.left_col {
            self.left_col = col;
        } else if self.visible_cols > 0 && col >= self.left_col + self.visible_cols {
            self.left_col = col + 1 - self.visible_cols;
        }

        self.clamp(total_rows, total_cols);
    }

    /// Scroll vertically by `delta` rows (negative is up)
    pub fn scroll_rows(&mut self, delta: i32, total_rows: usize, total_cols: usize) {
        self.top_row = offset(self.top_row, delta);
        self.clamp(total_rows, total_cols);
    }

    /// Scroll horizontally by `delta` columns (negative is left)
    pub fn scroll_cols(&mut self, delta: i32, total_rows: usize, total_cols: usize) {
        self.left_col = offset(self.left_col, delta);
        self.clamp(total_rows, total_cols);
    }

    /// Keep the viewport inside the table after a resize or a row/column removal
    pub fn clamp(&mut self, total_rows: usize, total_cols: usize) {
        let max_top = total_rows.saturating_sub(self.visible_rows.max(1));
        let max_left = total_cols.saturating_sub(self.visible_cols.max(1));
        self.top_row = self.top_row.min(max_top);
        self.left_col = self.left_col.min(max_left);
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.top_row && row < self.top_row + self.visible_rows
    }

    pub fn reset(&mut self) {
        self.top_row = 0;
        self.left_col = 0;
    }
}

fn offset(value: usize, delta: i32) -> usize {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        value.saturating_add(delta as usize)
    }
}
