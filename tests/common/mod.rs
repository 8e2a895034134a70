//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use semicell::config::AppConfig;
use semicell::grid::{CellPosition, GridStore};
use semicell::locale::Locale;
use semicell::messages::Msg;
use semicell::model::AppModel;
use semicell::theme::Theme;
use semicell::update::update;
use semicell::Cmd;

/// Build a string row from literals
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Create a 600x400 model with fixed font metrics showing `headings`/`rows`
pub fn test_model(headings: &[&str], rows: &[&[&str]]) -> AppModel {
    test_model_with_config(headings, rows, AppConfig::default())
}

pub fn test_model_with_config(headings: &[&str], rows: &[&[&str]], config: AppConfig) -> AppModel {
    let mut model = AppModel::new(600, 400, config, Theme::default());
    model.set_char_metrics(16, 8.0);
    let store = GridStore::with_data(row(headings), rows.iter().map(|r| row(r)).collect());
    model.sheet.replace(store);
    model.sync_viewport();
    model
}

/// A model with English status texts, for assertions on messages
pub fn english_model(headings: &[&str], rows: &[&[&str]]) -> AppModel {
    let config = AppConfig {
        language: Locale::En,
        ..AppConfig::default()
    };
    test_model_with_config(headings, rows, config)
}

/// Small people table used across tests
pub fn people() -> AppModel {
    test_model(
        &["name", "age", "city"],
        &[
            &["Ann", "31", "Oslo"],
            &["Bob", "27", "Riga"],
            &["Cid", "45", "Kyiv"],
        ],
    )
}

/// Send one message, returning the command
pub fn send(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    update(model, msg)
}

/// Column values of the current table
pub fn column(model: &AppModel, col: usize) -> Vec<String> {
    (0..model.sheet.table.row_count())
        .map(|r| model.sheet.table.cell(r, col).to_string())
        .collect()
}

pub fn pos(row: usize, col: usize) -> CellPosition {
    CellPosition::new(row, col)
}

/// Flatten a command into its leaves
pub fn leaves(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::into_vec).unwrap_or_default()
}
