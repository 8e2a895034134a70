//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::grid::{CellPosition, FileReadError, FileWriteError, LoadedTable};
use crate::menu::{MenuId, MenuItemId};

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// File lifecycle messages
#[derive(Debug)]
pub enum FileMsg {
    /// Empty the table (File > New)
    New,
    /// Show the open dialog (File > Open)
    Open,
    /// Save, asking for a path through the save dialog (File > Save)
    Save,
    /// Open a specific path without a dialog (command line)
    OpenPath(PathBuf),
    /// Open dialog closed; `None` when cancelled
    OpenDialogResult(Option<PathBuf>),
    /// Save dialog closed; `None` when cancelled
    SaveDialogResult(Option<PathBuf>),
    /// A file finished loading
    Loaded {
        path: PathBuf,
        result: Result<LoadedTable, FileReadError>,
    },
    /// A file finished saving
    Saved {
        path: PathBuf,
        result: Result<(), FileWriteError>,
    },
}

/// Table structure, sorting and selection messages
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    AddColumn,
    AddRow,
    DeleteColumn,
    DeleteRow,
    /// Fold or unfold the heading row (Edit > Edit contents)
    ToggleHeaderEdit,
    /// Heading click
    SortByColumn(usize),
    /// Single click on a cell
    SelectCell(CellPosition),
    /// Arrow keys
    MoveSelection(Direction),
    /// Wheel scroll in rows (positive = down)
    Scroll(i32),
    /// Wheel scroll in columns (positive = right)
    ScrollHorizontal(i32),
    /// Copy the selected cell's text to the clipboard
    CopySelected,
}

/// Cell editor messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditMsg {
    /// Double-click on a cell
    Begin(CellPosition),
    /// Enter/F2 on the selected cell
    BeginSelected,
    InsertChar(char),
    /// Paste
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Write the buffer back to the cell
    Commit,
    /// Escape
    Cancel,
    /// Window lost focus
    FocusLost,
}

/// Menu bar messages
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Open a drop-down (or close it if it's already open)
    Open(MenuId),
    Close,
    /// Pointer over an item (or off all items)
    Hover(Option<MenuItemId>),
    /// Run an item
    Activate(MenuItemId),
}

/// UI-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Toggle caret visibility
    BlinkCursor,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized to physical width/height
    Resize(u32, u32),
    /// Scale factor changed
    ScaleFactorChanged(f64),
    Quit,
}

/// Top-level message type
#[derive(Debug)]
pub enum Msg {
    File(FileMsg),
    Grid(GridMsg),
    Edit(EditMsg),
    Menu(MenuMsg),
    Ui(UiMsg),
    App(AppMsg),
}
