//! Table data, file I/O and geometry
//!
//! ```text
//! SheetState
//! ├── Table
//! │   ├── Titled(GridStore)      headings + rows
//! │   └── Folded { rows }        heading row is row 0
//! ├── Viewport                   visible region
//! └── EditSession                when a cell is being edited
//! ```
//!
//! Nothing in this module touches the window; the renderer and the input
//! handling both go through `TableLayout` for geometry.

pub mod csv_io;
mod edit;
pub mod layout;
mod sort;
mod store;
mod table;
mod viewport;

pub use csv_io::{
    FileReadError, FileWriteError, LineEnding, LoadedTable, TextFormat, DEFAULT_DELIMITER,
};
pub use edit::EditSession;
pub use layout::{LayoutMetrics, Rect, TableLayout};
pub use sort::{sort_rows, SortDirection, SortStrategy};
pub use store::{CellPosition, GridStore};
pub use table::Table;
pub use viewport::Viewport;
