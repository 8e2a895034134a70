//! UI state - status bar message, caret blink, open menu

use std::time::{Duration, Instant};

use crate::menu::{MenuId, MenuItemId};

/// State of the drawn menu bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Menu whose drop-down is shown
    pub open: Option<MenuId>,
    /// Item under the pointer in the open drop-down
    pub hovered: Option<MenuItemId>,
}

/// UI state - status messages and caret animation
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Whether the edit caret is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last caret blink state change
    pub last_cursor_blink: Instant,
    pub menu: MenuState,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_status(String::new())
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            menu: MenuState::default(),
        }
    }

    /// Reset caret blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update caret blink state based on elapsed time.
    /// Returns true if the state changed (needs redraw).
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.open.is_some()
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::default();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
