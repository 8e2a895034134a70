//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod sheet;
pub mod ui;

pub use sheet::SheetState;
pub use ui::{MenuState, UiState};

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::grid::{LayoutMetrics, TableLayout, TextFormat};
use crate::locale::Locale;
use crate::menu::MenuBarLayout;
use crate::theme::Theme;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Table contents and everything attached to them
    pub sheet: SheetState,
    /// UI state (status bar, caret blink, menus)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted configuration
    pub config: AppConfig,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
    /// Display scale factor
    pub scale_factor: f64,
    /// Last path successfully opened or saved
    pub file_path: Option<PathBuf>,
    /// Format of the opened file, reused when saving
    pub file_format: TextFormat,
}

impl AppModel {
    /// Create a model with an empty table
    pub fn new(window_width: u32, window_height: u32, config: AppConfig, theme: Theme) -> Self {
        let mut model = Self {
            sheet: SheetState::new(),
            ui: UiState::new(),
            theme,
            config,
            window_size: (window_width, window_height),
            // Corrected by the renderer once the font is loaded
            line_height: 20,
            char_width: 10.0,
            scale_factor: 1.0,
            file_path: None,
            file_format: TextFormat::default(),
        };
        model.sync_viewport();
        model
    }

    /// Update font metrics reported by the renderer
    pub fn set_char_metrics(&mut self, line_height: usize, char_width: f32) {
        self.line_height = line_height;
        self.char_width = char_width;
        self.sync_viewport();
    }

    pub fn locale(&self) -> Locale {
        self.config.language
    }

    pub fn delimiter(&self) -> u8 {
        self.config.delimiter_byte()
    }

    /// Measurements used for table and menu geometry
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            width: self.window_size.0 as usize,
            height: self.window_size.1 as usize,
            line_height: self.line_height,
            char_width: self.char_width,
            column_width: (self.config.column_width as f64 * self.scale_factor).round() as usize,
        }
    }

    /// Table geometry for the current frame
    pub fn table_layout(&self) -> TableLayout {
        TableLayout::calculate(&self.sheet.table, &self.sheet.viewport, &self.metrics())
    }

    pub fn menu_layout(&self) -> MenuBarLayout {
        MenuBarLayout::calculate(&self.metrics())
    }

    /// Recompute how many rows and columns fit, after a resize or a change
    /// to the table's shape
    pub fn sync_viewport(&mut self) {
        let layout = self.table_layout();
        self.sheet.viewport.visible_rows = layout.full_rows.max(1);
        self.sheet.viewport.visible_cols = layout.full_cols.max(1);
        self.sheet.clamp_selection();
    }

    /// File name for the status bar
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.locale().strings().untitled.to_string())
    }

    /// Left-hand status bar text: file name, header mode and dimensions
    pub fn status_summary(&self) -> String {
        let strings = self.locale().strings();
        let mode = if self.sheet.table.is_folded() {
            strings.mode_folded
        } else {
            strings.mode_titled
        };
        format!(
            "{}  |  {}  |  {} {} x {} {}",
            self.display_name(),
            mode,
            self.sheet.table.row_count(),
            strings.rows,
            self.sheet.table.column_count(),
            strings.columns
        )
    }

    /// Directory to start the open dialog in
    pub fn dialog_dir(&self) -> Option<PathBuf> {
        self.file_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
    }
}
