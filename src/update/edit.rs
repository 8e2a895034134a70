//! Cell editor update functions

use crate::commands::Cmd;
use crate::grid::{CellPosition, EditSession};
use crate::messages::EditMsg;
use crate::model::AppModel;

/// Horizontal padding inside the editor overlay, per side
pub const EDIT_PADDING_PX: usize = 4;

/// Handle cell editor messages
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Begin(position) => begin(model, position),
        EditMsg::BeginSelected => {
            let position = model.sheet.selection?;
            begin(model, position)
        }
        EditMsg::InsertChar(ch) => with_session(model, |edit| edit.insert_char(ch)),
        EditMsg::InsertText(text) => with_session(model, |edit| edit.insert_text(&text)),
        EditMsg::DeleteBackward => with_session(model, EditSession::delete_backward),
        EditMsg::DeleteForward => with_session(model, EditSession::delete_forward),
        EditMsg::CursorLeft => with_session(model, EditSession::cursor_left),
        EditMsg::CursorRight => with_session(model, EditSession::cursor_right),
        EditMsg::CursorHome => with_session(model, EditSession::cursor_home),
        EditMsg::CursorEnd => with_session(model, EditSession::cursor_end),
        EditMsg::Commit | EditMsg::FocusLost => {
            commit_pending_edit(model).then_some(Cmd::Redraw)
        }
        EditMsg::Cancel => {
            if !model.config.edit.escape_cancels {
                return commit_pending_edit(model).then_some(Cmd::Redraw);
            }
            let edit = model.sheet.editing.take()?;
            tracing::debug!(
                row = edit.position.row,
                col = edit.position.col,
                "cell edit cancelled"
            );
            Some(Cmd::Redraw)
        }
    }
}

/// Write an open editor's text back into its cell and close it.
/// Returns false when nothing was being edited.
pub fn commit_pending_edit(model: &mut AppModel) -> bool {
    let Some(edit) = model.sheet.editing.take() else {
        return false;
    };
    let CellPosition { row, col } = edit.position;
    if model.sheet.table.set_cell(row, col, &edit.text) {
        tracing::debug!(row, col, modified = edit.is_modified(), "cell edit committed");
    } else {
        tracing::debug!(row, col, "cell edit target vanished, dropping text");
    }
    true
}

/// Open the editor over a cell. Positions outside the table are ignored.
fn begin(model: &mut AppModel, position: CellPosition) -> Option<Cmd> {
    if model.sheet.editing.as_ref().map(|e| e.position) == Some(position) {
        return None;
    }
    commit_pending_edit(model);

    let table = &model.sheet.table;
    if position.row >= table.row_count() || position.col >= table.column_count() {
        tracing::debug!(
            row = position.row,
            col = position.col,
            "edit requested outside the table"
        );
        return Some(Cmd::Redraw);
    }

    let value = table.cell(position.row, position.col).to_string();
    model.sheet.selection = Some(position);
    model.sheet.reveal_selection();
    model.sheet.editing = Some(EditSession::new(position, &value));
    model.ui.close_menu();
    model.ui.reset_cursor_blink();
    keep_caret_visible(model);
    Some(Cmd::Redraw)
}

fn with_session(model: &mut AppModel, f: impl FnOnce(&mut EditSession)) -> Option<Cmd> {
    let edit = model.sheet.editing.as_mut()?;
    f(edit);
    model.ui.reset_cursor_blink();
    keep_caret_visible(model);
    Some(Cmd::Redraw)
}

/// Number of characters that fit inside the editor overlay
pub fn visible_edit_chars(model: &AppModel) -> usize {
    let width = model.metrics().column_width.saturating_sub(EDIT_PADDING_PX * 2);
    (width as f32 / model.char_width.max(1.0)).floor() as usize
}

fn keep_caret_visible(model: &mut AppModel) {
    let visible = visible_edit_chars(model);
    if let Some(edit) = model.sheet.editing.as_mut() {
        edit.ensure_caret_visible(visible);
    }
}
