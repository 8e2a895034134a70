//! Header mode wrapper around the grid
//!
//! `Titled` shows headings as column titles. `Folded` turns the heading row
//! into the first ordinary row so it can be edited like any other cell.

use super::store::{cell_of, set_cell_in, GridStore};

/// Table contents together with the header mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    /// Headings are column titles
    Titled(GridStore),
    /// Heading row folded into the data rows (header-edit mode)
    Folded { rows: Vec<Vec<String>> },
}

impl Default for Table {
    fn default() -> Self {
        Table::Titled(GridStore::new())
    }
}

impl Table {
    pub fn titled(store: GridStore) -> Self {
        Table::Titled(store)
    }

    pub fn is_folded(&self) -> bool {
        matches!(self, Table::Folded { .. })
    }

    /// Headings shown as column titles; empty while folded
    pub fn headings(&self) -> &[String] {
        match self {
            Table::Titled(store) => store.headings(),
            Table::Folded { .. } => &[],
        }
    }

    /// Rows drawn as data rows in the current mode
    pub fn rows(&self) -> &[Vec<String>] {
        match self {
            Table::Titled(store) => store.rows(),
            Table::Folded { rows } => rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Number of columns to draw.
    ///
    /// Titled tables use the heading count. Folded tables use the widest row,
    /// which is normally the folded heading row.
    pub fn column_count(&self) -> usize {
        match self {
            Table::Titled(store) => store.column_count(),
            Table::Folded { rows } => rows.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Table::Titled(store) => store.is_empty(),
            Table::Folded { rows } => rows.is_empty(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        cell_of(self.rows(), row, col)
    }

    /// Overwrite a cell in the visible rows. Returns false when out of range.
    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) -> bool {
        match self {
            Table::Titled(store) => store.set_cell(row, col, value),
            Table::Folded { rows } => set_cell_in(rows, row, col, value),
        }
    }

    /// Mutable access to the grid for structural edits; `None` while folded
    pub fn store_mut(&mut self) -> Option<&mut GridStore> {
        match self {
            Table::Titled(store) => Some(store),
            Table::Folded { .. } => None,
        }
    }

    /// Switch between titled and folded mode without losing data
    pub fn toggle_header_mode(&mut self) {
        let current = std::mem::take(self);
        *self = match current {
            Table::Titled(store) => {
                let (headings, rows) = store.into_parts();
                let mut folded = Vec::with_capacity(rows.len() + 1);
                folded.push(headings);
                folded.extend(rows);
                Table::Folded { rows: folded }
            }
            Table::Folded { rows } => Table::Titled(GridStore::from_records(rows)),
        };
    }

    /// Records to save in either mode.
    ///
    /// Folded rows are written verbatim, which matches what saving after
    /// unfolding would produce (an empty heading row is skipped both ways).
    pub fn to_records(&self) -> Vec<Vec<String>> {
        match self {
            Table::Titled(store) => store.to_records(),
            Table::Folded { rows } => {
                let skip = usize::from(rows.first().is_some_and(Vec::is_empty));
                rows[skip..].to_vec()
            }
        }
    }
}
