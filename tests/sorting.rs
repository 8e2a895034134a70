//! Sorting by heading click

mod common;

use common::{column, english_model, people, send, test_model, test_model_with_config};
use semicell::config::{AppConfig, SortConfig};
use semicell::grid::SortStrategy;
use semicell::messages::{GridMsg, Msg};

fn sort(model: &mut semicell::AppModel, col: usize) {
    send(model, Msg::Grid(GridMsg::SortByColumn(col)));
}

#[test]
fn test_repeated_sort_alternates_direction() {
    let mut model = people();

    sort(&mut model, 1);
    assert_eq!(column(&model, 1), ["27", "31", "45"]);
    sort(&mut model, 1);
    assert_eq!(column(&model, 1), ["45", "31", "27"]);
    sort(&mut model, 1);
    assert_eq!(column(&model, 1), ["27", "31", "45"]);
}

#[test]
fn test_direction_is_shared_across_columns() {
    let mut model = people();
    sort(&mut model, 0);
    assert_eq!(column(&model, 0), ["Ann", "Bob", "Cid"]);
    sort(&mut model, 2);
    assert_eq!(column(&model, 2), ["Riga", "Oslo", "Kyiv"]);
}

#[test]
fn test_rows_move_as_a_unit() {
    let mut model = people();
    sort(&mut model, 2);
    assert_eq!(column(&model, 2), ["Kyiv", "Oslo", "Riga"]);
    assert_eq!(column(&model, 0), ["Cid", "Ann", "Bob"]);
}

#[test]
fn test_keys_compare_as_text() {
    let mut model = test_model(&["n"], &[&["9"], &["10"], &["100"], &["b"], &["B"]]);
    sort(&mut model, 0);
    assert_eq!(column(&model, 0), ["10", "100", "9", "B", "b"]);
}

#[test]
fn test_stable_sort_keeps_ties_in_order() {
    let mut model = test_model(
        &["k", "tag"],
        &[&["1", "first"], &["0", "x"], &["1", "second"], &["1", "third"]],
    );
    sort(&mut model, 0);
    assert_eq!(column(&model, 1), ["x", "first", "second", "third"]);

    sort(&mut model, 0);
    assert_eq!(column(&model, 1), ["first", "second", "third", "x"]);
}

#[test]
fn test_missing_cells_sort_as_empty() {
    let mut model = test_model(&["a", "b"], &[&["1", "z"], &["2"], &["3", "a"]]);
    sort(&mut model, 1);
    assert_eq!(column(&model, 0), ["2", "3", "1"]);
}

#[test]
fn test_collapse_duplicates_keeps_last_row_per_key() {
    let config = AppConfig {
        sort: SortConfig {
            strategy: SortStrategy::CollapseDuplicates,
        },
        ..AppConfig::default()
    };
    let mut model = test_model_with_config(
        &["k", "v"],
        &[&["b", "1"], &["a", "2"], &["b", "3"]],
        config,
    );
    sort(&mut model, 0);

    assert_eq!(model.sheet.table.row_count(), 2);
    assert_eq!(column(&model, 0), ["a", "b"]);
    assert_eq!(column(&model, 1), ["2", "3"]);
}

#[test]
fn test_sort_of_missing_column_does_nothing() {
    let mut model = people();
    let before = model.sheet.table.clone();
    assert!(send(&mut model, Msg::Grid(GridMsg::SortByColumn(7))).is_none());
    assert_eq!(model.sheet.table, before);
    assert_eq!(
        model.sheet.sort_direction,
        semicell::grid::SortDirection::Ascending
    );
}

#[test]
fn test_sort_reports_heading_and_direction() {
    let mut model = english_model(&["city"], &[&["Riga"], &["Oslo"]]);
    sort(&mut model, 0);
    assert_eq!(model.ui.status_message, "Sorted by \"city\" ascending");
    sort(&mut model, 0);
    assert_eq!(model.ui.status_message, "Sorted by \"city\" descending");
}

#[test]
fn test_russian_sort_status() {
    let mut model = people();
    sort(&mut model, 0);
    assert_eq!(model.ui.status_message, "Сортировка по «name» по возрастанию");
}
