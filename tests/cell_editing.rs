//! In-place cell editor behavior

mod common;

use common::{people, pos, send, test_model_with_config};
use semicell::config::{AppConfig, EditConfig};
use semicell::messages::{EditMsg, GridMsg, Msg};
use semicell::update::visible_edit_chars;
use semicell::AppModel;

fn edit(model: &mut AppModel, msg: EditMsg) {
    send(model, Msg::Edit(msg));
}

#[test]
fn test_begin_loads_cell_value_with_caret_at_end() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(1, 2)));

    let session = model.sheet.editing.as_ref().unwrap();
    assert_eq!(session.text, "Riga");
    assert_eq!(session.caret, 4);
    assert_eq!(model.sheet.selection, Some(pos(1, 2)));
}

#[test]
fn test_typing_and_commit_updates_cell() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(0, 0)));
    edit(&mut model, EditMsg::CursorHome);
    edit(&mut model, EditMsg::InsertChar('>'));
    edit(&mut model, EditMsg::CursorEnd);
    edit(&mut model, EditMsg::DeleteBackward);
    edit(&mut model, EditMsg::InsertText("a!".into()));
    edit(&mut model, EditMsg::Commit);

    assert!(!model.sheet.is_editing());
    assert_eq!(model.sheet.table.cell(0, 0), ">Ana!");
}

#[test]
fn test_escape_discards_by_default() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(0, 1)));
    edit(&mut model, EditMsg::InsertChar('0'));
    edit(&mut model, EditMsg::Cancel);

    assert!(!model.sheet.is_editing());
    assert_eq!(model.sheet.table.cell(0, 1), "31");
}

#[test]
fn test_escape_can_be_configured_to_commit() {
    let config = AppConfig {
        edit: EditConfig {
            escape_cancels: false,
        },
        ..AppConfig::default()
    };
    let mut model = test_model_with_config(&["a"], &[&["1"]], config);
    edit(&mut model, EditMsg::Begin(pos(0, 0)));
    edit(&mut model, EditMsg::InsertChar('2'));
    edit(&mut model, EditMsg::Cancel);

    assert_eq!(model.sheet.table.cell(0, 0), "12");
}

#[test]
fn test_focus_loss_commits() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(2, 0)));
    edit(&mut model, EditMsg::InsertChar('?'));
    edit(&mut model, EditMsg::FocusLost);

    assert!(!model.sheet.is_editing());
    assert_eq!(model.sheet.table.cell(2, 0), "Cid?");
}

#[test]
fn test_beginning_another_cell_commits_the_first() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(0, 0)));
    edit(&mut model, EditMsg::InsertChar('1'));
    edit(&mut model, EditMsg::Begin(pos(1, 0)));

    assert_eq!(model.sheet.table.cell(0, 0), "Ann1");
    assert_eq!(model.sheet.editing.as_ref().unwrap().position, pos(1, 0));
}

#[test]
fn test_begin_outside_table_is_ignored() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(9, 0)));
    assert!(!model.sheet.is_editing());
    edit(&mut model, EditMsg::Begin(pos(0, 9)));
    assert!(!model.sheet.is_editing());
}

#[test]
fn test_begin_selected_without_selection_does_nothing() {
    let mut model = people();
    assert!(send(&mut model, Msg::Edit(EditMsg::BeginSelected)).is_none());
    assert!(!model.sheet.is_editing());
}

#[test]
fn test_edit_messages_without_editor_are_ignored() {
    let mut model = people();
    assert!(send(&mut model, Msg::Edit(EditMsg::InsertChar('x'))).is_none());
    assert!(send(&mut model, Msg::Edit(EditMsg::Commit)).is_none());
}

#[test]
fn test_pasted_line_breaks_are_dropped() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(0, 2)));
    edit(&mut model, EditMsg::CursorHome);
    edit(&mut model, EditMsg::InsertText("New\r\nYork ".into()));
    edit(&mut model, EditMsg::Commit);
    assert_eq!(model.sheet.table.cell(0, 2), "NewYork Oslo");
}

#[test]
fn test_editing_missing_cell_pads_short_row() {
    let mut model = common::test_model(&["a", "b", "c"], &[&["1"]]);
    edit(&mut model, EditMsg::Begin(pos(0, 2)));
    assert_eq!(model.sheet.editing.as_ref().unwrap().text, "");
    edit(&mut model, EditMsg::InsertChar('z'));
    edit(&mut model, EditMsg::Commit);

    assert_eq!(model.sheet.table.cell(0, 1), "");
    assert_eq!(model.sheet.table.cell(0, 2), "z");
}

#[test]
fn test_long_text_scrolls_to_keep_caret_visible() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(0, 0)));
    edit(&mut model, EditMsg::InsertText("abcdefghijklmnopqrstuvwxyz".into()));

    let visible = visible_edit_chars(&model);
    let session = model.sheet.editing.as_ref().unwrap();
    assert!(session.scroll_x > 0);
    assert!(session.caret - session.scroll_x < visible);

    edit(&mut model, EditMsg::CursorHome);
    assert_eq!(model.sheet.editing.as_ref().unwrap().scroll_x, 0);
}

#[test]
fn test_structural_edit_commits_open_editor() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(2, 1)));
    edit(&mut model, EditMsg::InsertChar('9'));
    send(&mut model, Msg::Grid(GridMsg::AddRow));

    assert!(!model.sheet.is_editing());
    assert_eq!(model.sheet.table.cell(2, 1), "459");
    assert_eq!(model.sheet.table.row_count(), 4);
}

#[test]
fn test_copy_selected_puts_cell_on_clipboard() {
    let mut model = people();
    send(&mut model, Msg::Grid(GridMsg::SelectCell(pos(1, 0))));
    let cmds = common::leaves(send(&mut model, Msg::Grid(GridMsg::CopySelected)));
    assert!(cmds.contains(&semicell::Cmd::CopyToClipboard { text: "Bob".into() }));
}

#[test]
fn test_copy_while_editing_takes_editor_text() {
    let mut model = people();
    edit(&mut model, EditMsg::Begin(pos(0, 2)));
    edit(&mut model, EditMsg::InsertText(" West".into()));

    let cmds = common::leaves(send(&mut model, Msg::Grid(GridMsg::CopySelected)));
    assert!(cmds.contains(&semicell::Cmd::CopyToClipboard {
        text: "Oslo West".into()
    }));
    // Copying leaves the editor open
    assert!(model.sheet.is_editing());
    assert_eq!(model.sheet.table.cell(0, 2), "Oslo");
}
