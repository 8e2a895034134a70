//! Table state: contents, sort direction, selection, viewport, cell editor

use crate::grid::{CellPosition, EditSession, GridStore, SortDirection, Table, Viewport};

/// Everything about the table that the update layer mutates
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    pub table: Table,
    /// Direction the next heading click sorts in
    pub sort_direction: SortDirection,
    /// Focused cell
    pub selection: Option<CellPosition>,
    pub viewport: Viewport,
    /// Active cell editor, if any
    pub editing: Option<EditSession>,
}

impl SheetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet showing a freshly loaded grid
    pub fn with_store(store: GridStore) -> Self {
        Self {
            table: Table::titled(store),
            ..Self::default()
        }
    }

    /// Replace the contents wholesale (New/Open). Always titled.
    pub fn replace(&mut self, store: GridStore) {
        let viewport = Viewport::new(self.viewport.visible_rows, self.viewport.visible_cols);
        *self = Self {
            viewport,
            ..Self::with_store(store)
        };
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Drop the selection if it no longer points at a cell, and keep the
    /// viewport inside the table
    pub fn clamp_selection(&mut self) {
        let rows = self.table.row_count();
        let cols = self.table.column_count();
        if let Some(sel) = self.selection {
            if rows == 0 || cols == 0 {
                self.selection = None;
            } else {
                self.selection = Some(CellPosition::new(
                    sel.row.min(rows - 1),
                    sel.col.min(cols - 1),
                ));
            }
        }
        self.viewport.clamp(rows, cols);
    }

    /// Scroll so the selected cell is on screen
    pub fn reveal_selection(&mut self) {
        if let Some(sel) = self.selection {
            let rows = self.table.row_count();
            let cols = self.table.column_count();
            self.viewport.ensure_visible(sel.row, sel.col, rows, cols);
        }
    }
}
