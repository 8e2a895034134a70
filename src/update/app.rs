//! Application and UI update functions

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::{AppMsg, UiMsg};
use crate::model::AppModel;

/// Caret blink interval
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Handle application messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            model.sync_viewport();
            Some(Cmd::Redraw)
        }
        AppMsg::ScaleFactorChanged(scale_factor) => {
            model.scale_factor = scale_factor;
            model.sync_viewport();
            Some(Cmd::Redraw)
        }
        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor => {
            if model.sheet.is_editing() && model.ui.update_cursor_blink(BLINK_INTERVAL) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
