//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod edit;
mod file;
mod grid;
mod menu;

use crate::commands::Cmd;
use crate::messages::{FileMsg, GridMsg, MenuMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::{update_app, update_ui, BLINK_INTERVAL};
pub use edit::{commit_pending_edit, update_edit, visible_edit_chars, EDIT_PADDING_PX};
pub use file::update_file;
pub use grid::update_grid;
pub use menu::update_menu;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    if commits_pending_edit(&msg) {
        commit_pending_edit(model);
    }

    match msg {
        Msg::File(m) => file::update_file(model, m),
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Ui(m) => app::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Table and file commands, and opening a menu, write back an open cell
/// editor before they run. The save dialog does not block the window, so an
/// edit started while it was up is committed before the records are taken.
fn commits_pending_edit(msg: &Msg) -> bool {
    match msg {
        Msg::File(m) => matches!(
            m,
            FileMsg::New
                | FileMsg::Open
                | FileMsg::Save
                | FileMsg::OpenPath(_)
                | FileMsg::SaveDialogResult(Some(_))
        ),
        Msg::Grid(m) => !matches!(m, GridMsg::CopySelected),
        Msg::Menu(m) => matches!(m, MenuMsg::Open(_)),
        Msg::Edit(_) | Msg::Ui(_) | Msg::App(_) => false,
    }
}

/// Traced update wrapper (debug builds only)
///
/// Filters out noisy messages like BlinkCursor from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::BlinkCursor));
    if is_noisy {
        return update_inner(model, msg);
    }

    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    update_inner(model, msg)
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments, except for
/// file results whose payload can be an entire table.
/// Example outputs:
/// - `Grid::SortByColumn(2)`
/// - `Edit::InsertChar('x')`
/// - `File::Loaded("/tmp/a.csv")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::File(FileMsg::Loaded { path, .. }) => format!("File::Loaded({:?})", path),
        Msg::File(FileMsg::Saved { path, .. }) => format!("File::Saved({:?})", path),
        Msg::File(m) => format!("File::{:?}", m),
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::Menu(m) => format!("Menu::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
