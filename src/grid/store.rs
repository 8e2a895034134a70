//! Grid data model
//!
//! Headings plus rows of string cells. All mutation happens in place through
//! `&mut self` methods; the update layer owns the only mutable reference.

/// Position of a cell in the data rows (headings are not addressable here)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Column headings and data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridStore {
    headings: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl GridStore {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from explicit headings and rows
    pub fn with_data(headings: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headings, rows }
    }

    /// Build a grid from CSV records: the first record becomes the headings,
    /// everything after it becomes rows.
    pub fn from_records(records: Vec<Vec<String>>) -> Self {
        let mut records = records.into_iter();
        match records.next() {
            Some(headings) => Self {
                headings,
                rows: records.collect(),
            },
            None => Self::default(),
        }
    }

    /// Records to write back out. Headings are only emitted when present.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        let mut records = Vec::with_capacity(self.rows.len() + 1);
        if !self.headings.is_empty() {
            records.push(self.headings.clone());
        }
        records.extend(self.rows.iter().cloned());
        records
    }

    /// Split into headings and rows
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headings, self.rows)
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Vec<String>> {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of headings
    pub fn column_count(&self) -> usize {
        self.headings.len()
    }

    /// True when there are neither headings nor rows
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.rows.is_empty()
    }

    /// Remove all headings and rows
    pub fn clear(&mut self) {
        self.headings.clear();
        self.rows.clear();
    }

    /// Append a `Column N` heading and an empty cell to every row.
    ///
    /// With no rows, a first row is created instead of padding, so an empty
    /// grid becomes 1x1.
    pub fn add_column(&mut self) {
        let name = format!("Column {}", self.headings.len() + 1);
        self.headings.push(name);
        if self.rows.is_empty() {
            self.add_row();
        } else {
            for row in &mut self.rows {
                row.push(String::new());
            }
        }
    }

    /// Append a row of empty cells, one per heading.
    ///
    /// With no headings, a first column is created instead, which in turn
    /// creates the row.
    pub fn add_row(&mut self) {
        if self.headings.is_empty() {
            self.add_column();
        } else {
            self.rows.push(vec![String::new(); self.headings.len()]);
        }
    }

    /// Remove the last heading and the last cell of every row
    pub fn delete_column(&mut self) {
        if self.headings.pop().is_none() {
            return;
        }
        for row in &mut self.rows {
            row.pop();
        }
    }

    /// Remove the last row
    pub fn delete_row(&mut self) {
        self.rows.pop();
    }

    /// Cell value, or `""` for a position past the end of a short row
    pub fn cell(&self, row: usize, col: usize) -> &str {
        cell_of(&self.rows, row, col)
    }

    /// Overwrite a cell. Returns false when the row does not exist.
    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) -> bool {
        set_cell_in(&mut self.rows, row, col, value)
    }
}

/// Read a cell from a list of rows, `""` when out of range
pub fn cell_of(rows: &[Vec<String>], row: usize, col: usize) -> &str {
    rows.get(row)
        .and_then(|cells| cells.get(col))
        .map(String::as_str)
        .unwrap_or("")
}

/// Write a cell into a list of rows, padding a short row with empty cells.
/// Returns false when `row` is out of range.
pub fn set_cell_in(rows: &mut [Vec<String>], row: usize, col: usize, value: &str) -> bool {
    let Some(cells) = rows.get_mut(row) else {
        return false;
    };
    if cells.len() <= col {
        cells.resize(col + 1, String::new());
    }
    cells[col] = value.to_string();
    true
}
