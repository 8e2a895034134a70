//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds any results back as messages.

use std::path::PathBuf;

use crate::grid::TextFormat;

/// Severity of a modal notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A modal native message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // File dialogs
    /// Show native open file dialog
    ShowOpenFileDialog {
        /// Starting directory for the dialog
        start_dir: Option<PathBuf>,
    },
    /// Show native save file dialog
    ShowSaveFileDialog {
        /// Suggested file path (for pre-filling name/directory)
        suggested_path: Option<PathBuf>,
    },

    // File I/O
    /// Read and parse a file, answered with `FileMsg::Loaded`
    LoadFile { path: PathBuf },
    /// Serialize and write records, answered with `FileMsg::Saved`
    SaveFile {
        path: PathBuf,
        records: Vec<Vec<String>>,
        /// BOM and line ending to write, usually those of the opened file
        format: TextFormat,
    },

    /// Show a modal message box
    ShowNotice(Notice),
    /// Put text on the system clipboard
    CopyToClipboard { text: String },

    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Dialogs don't need immediate redraw - they'll trigger messages when done
            Cmd::ShowOpenFileDialog { .. } => false,
            Cmd::ShowSaveFileDialog { .. } => false,
            // File results come back as messages that redraw on their own
            Cmd::LoadFile { .. } => false,
            Cmd::SaveFile { .. } => false,
            Cmd::ShowNotice(_) => false,
            Cmd::CopyToClipboard { .. } => false,
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }

    /// Whether this command (or any command in a batch) shows a notice
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Cmd::ShowNotice(notice) => Some(notice),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::notice),
            _ => None,
        }
    }
}
