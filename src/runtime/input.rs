//! Keyboard input handling
//!
//! Maps key presses to messages. Shortcuts match on physical key codes so
//! they keep working under non-Latin layouts. While a cell editor is open,
//! plain keys go to the editor and shortcuts still reach the table.

use winit::keyboard::{Key, KeyCode, NamedKey, PhysicalKey};

use semicell::commands::Cmd;
use semicell::messages::{AppMsg, Direction, EditMsg, FileMsg, GridMsg, MenuMsg, Msg};
use semicell::model::AppModel;
use semicell::update::update;

/// Modifier state relevant to shortcuts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    /// Ctrl, or Command on macOS
    pub ctrl: bool,
    pub alt: bool,
}

/// Handle a key press. `text` is the text the key would type, if any.
pub fn handle_key(
    model: &mut AppModel,
    key: &Key,
    physical_key: PhysicalKey,
    text: Option<&str>,
    mods: KeyModifiers,
) -> Option<Cmd> {
    if let Some(msg) = shortcut_msg(physical_key, mods) {
        return update(model, msg);
    }

    if model.sheet.is_editing() {
        return handle_edit_key(model, key, text, mods);
    }

    match key {
        Key::Named(NamedKey::Escape) => update(model, Msg::Menu(MenuMsg::Close)),
        Key::Named(NamedKey::ArrowUp) => {
            update(model, Msg::Grid(GridMsg::MoveSelection(Direction::Up)))
        }
        Key::Named(NamedKey::ArrowDown) => {
            update(model, Msg::Grid(GridMsg::MoveSelection(Direction::Down)))
        }
        Key::Named(NamedKey::ArrowLeft) => {
            update(model, Msg::Grid(GridMsg::MoveSelection(Direction::Left)))
        }
        Key::Named(NamedKey::ArrowRight) => {
            update(model, Msg::Grid(GridMsg::MoveSelection(Direction::Right)))
        }
        Key::Named(NamedKey::PageUp) => {
            let page = model.sheet.viewport.visible_rows.max(1) as i32;
            update(model, Msg::Grid(GridMsg::Scroll(-page)))
        }
        Key::Named(NamedKey::PageDown) => {
            let page = model.sheet.viewport.visible_rows.max(1) as i32;
            update(model, Msg::Grid(GridMsg::Scroll(page)))
        }
        Key::Named(NamedKey::Enter) | Key::Named(NamedKey::F2) => {
            update(model, Msg::Edit(EditMsg::BeginSelected))
        }
        _ => None,
    }
}

/// Global shortcuts, available whether or not a cell is being edited
fn shortcut_msg(physical_key: PhysicalKey, mods: KeyModifiers) -> Option<Msg> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };
    if !mods.ctrl {
        return None;
    }

    let msg = if mods.alt {
        match code {
            KeyCode::ArrowRight => Msg::Grid(GridMsg::AddColumn),
            KeyCode::ArrowDown => Msg::Grid(GridMsg::AddRow),
            KeyCode::ArrowLeft => Msg::Grid(GridMsg::DeleteColumn),
            KeyCode::ArrowUp => Msg::Grid(GridMsg::DeleteRow),
            _ => return None,
        }
    } else {
        match code {
            KeyCode::KeyN => Msg::File(FileMsg::New),
            KeyCode::KeyO => Msg::File(FileMsg::Open),
            KeyCode::KeyS => Msg::File(FileMsg::Save),
            KeyCode::KeyQ => Msg::App(AppMsg::Quit),
            KeyCode::KeyE => Msg::Grid(GridMsg::ToggleHeaderEdit),
            KeyCode::KeyC => Msg::Grid(GridMsg::CopySelected),
            _ => return None,
        }
    };
    Some(msg)
}

fn handle_edit_key(
    model: &mut AppModel,
    key: &Key,
    text: Option<&str>,
    mods: KeyModifiers,
) -> Option<Cmd> {
    let msg = match key {
        Key::Named(NamedKey::Enter) => EditMsg::Commit,
        Key::Named(NamedKey::Escape) => EditMsg::Cancel,
        Key::Named(NamedKey::Backspace) => EditMsg::DeleteBackward,
        Key::Named(NamedKey::Delete) => EditMsg::DeleteForward,
        Key::Named(NamedKey::ArrowLeft) => EditMsg::CursorLeft,
        Key::Named(NamedKey::ArrowRight) => EditMsg::CursorRight,
        Key::Named(NamedKey::Home) => EditMsg::CursorHome,
        Key::Named(NamedKey::End) => EditMsg::CursorEnd,
        _ if mods.ctrl => return None,
        _ => {
            let typed = text
                .or(match key {
                    Key::Character(s) => Some(s.as_str()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())?;
            let mut chars = typed.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => EditMsg::InsertChar(ch),
                _ => EditMsg::InsertText(typed.to_string()),
            }
        }
    };
    update(model, Msg::Edit(msg))
}
