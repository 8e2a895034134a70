//! Structural edits through the update loop

mod common;

use common::{people, row, send, test_model};
use semicell::grid::GridStore;
use semicell::messages::{GridMsg, Msg};

#[test]
fn test_add_column_on_empty_table_makes_one_cell() {
    let mut model = test_model(&[], &[]);
    send(&mut model, Msg::Grid(GridMsg::AddColumn));

    assert_eq!(model.sheet.table.headings(), &row(&["Column 1"])[..]);
    assert_eq!(model.sheet.table.rows(), &[row(&[""])][..]);
}

#[test]
fn test_add_row_then_columns_keeps_rows_aligned() {
    let mut model = test_model(&[], &[]);
    send(&mut model, Msg::Grid(GridMsg::AddRow));
    send(&mut model, Msg::Grid(GridMsg::AddColumn));
    send(&mut model, Msg::Grid(GridMsg::AddColumn));

    let headings = model.sheet.table.headings().len();
    assert_eq!(headings, 3);
    for r in model.sheet.table.rows() {
        assert_eq!(r.len(), headings);
    }
}

#[test]
fn test_add_column_names_follow_count() {
    let mut model = people();
    send(&mut model, Msg::Grid(GridMsg::AddColumn));
    assert_eq!(model.sheet.table.headings()[3], "Column 4");
    assert_eq!(model.sheet.table.cell(2, 3), "");
}

#[test]
fn test_delete_column_removes_last() {
    let mut model = people();
    send(&mut model, Msg::Grid(GridMsg::DeleteColumn));
    assert_eq!(model.sheet.table.headings(), &row(&["name", "age"])[..]);
    assert_eq!(model.sheet.table.rows()[0], row(&["Ann", "31"]));
}

#[test]
fn test_delete_column_without_headings_is_noop() {
    let mut model = test_model(&[], &[]);
    send(&mut model, Msg::Grid(GridMsg::DeleteColumn));
    assert!(model.sheet.table.is_empty());
}

#[test]
fn test_delete_row_on_empty_table_is_noop() {
    let mut model = test_model(&["a"], &[]);
    send(&mut model, Msg::Grid(GridMsg::DeleteRow));
    assert_eq!(model.sheet.table.row_count(), 0);
    assert_eq!(model.sheet.table.column_count(), 1);
}

#[test]
fn test_delete_row_clamps_selection() {
    let mut model = people();
    model.sheet.selection = Some(common::pos(2, 1));
    send(&mut model, Msg::Grid(GridMsg::DeleteRow));
    assert_eq!(model.sheet.selection, Some(common::pos(1, 1)));
}

#[test]
fn test_added_row_is_scrolled_into_view() {
    let rows: Vec<Vec<String>> = (0..50).map(|i| row(&[&i.to_string()])).collect();
    let mut model = test_model(&["n"], &[]);
    model.sheet.replace(GridStore::with_data(row(&["n"]), rows));
    model.sync_viewport();

    send(&mut model, Msg::Grid(GridMsg::AddRow));
    let last = model.sheet.table.row_count() - 1;
    assert!(model.sheet.viewport.is_row_visible(last));
}

#[test]
fn test_structural_edit_returns_redraw() {
    let mut model = people();
    let cmd = send(&mut model, Msg::Grid(GridMsg::AddRow));
    assert!(cmd.is_some_and(|c| c.needs_redraw()));
}
