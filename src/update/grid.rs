//! Table structure, sorting and selection update functions

use crate::commands::Cmd;
use crate::grid::{sort_rows, CellPosition, GridStore};
use crate::messages::{Direction, GridMsg};
use crate::model::AppModel;

/// Handle table messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::AddColumn => structural_edit(model, "add_column", GridStore::add_column),
        GridMsg::AddRow => {
            let cmd = structural_edit(model, "add_row", GridStore::add_row);
            let last = model.sheet.table.row_count().saturating_sub(1);
            let rows = model.sheet.table.row_count();
            let cols = model.sheet.table.column_count();
            model.sheet.viewport.ensure_visible(last, 0, rows, cols);
            cmd
        }
        GridMsg::DeleteColumn => structural_edit(model, "delete_column", GridStore::delete_column),
        GridMsg::DeleteRow => structural_edit(model, "delete_row", GridStore::delete_row),
        GridMsg::ToggleHeaderEdit => toggle_header_edit(model),
        GridMsg::SortByColumn(col) => sort_by_column(model, col),
        GridMsg::SelectCell(position) => select_cell(model, position),
        GridMsg::MoveSelection(direction) => move_selection(model, direction),
        GridMsg::Scroll(delta) => {
            let rows = model.sheet.table.row_count();
            let cols = model.sheet.table.column_count();
            model.sheet.viewport.scroll_rows(delta, rows, cols);
            Some(Cmd::Redraw)
        }
        GridMsg::ScrollHorizontal(delta) => {
            let rows = model.sheet.table.row_count();
            let cols = model.sheet.table.column_count();
            model.sheet.viewport.scroll_cols(delta, rows, cols);
            Some(Cmd::Redraw)
        }
        GridMsg::CopySelected => {
            // An open editor copies what is typed, not the stored value
            let text = match &model.sheet.editing {
                Some(edit) => edit.text.clone(),
                None => {
                    let sel = model.sheet.selection?;
                    model.sheet.table.cell(sel.row, sel.col).to_string()
                }
            };
            let status = model.locale().strings().copied;
            model.ui.set_status(status);
            Some(Cmd::batch(vec![Cmd::CopyToClipboard { text }, Cmd::Redraw]))
        }
    }
}

/// Run an add/delete operation on the grid, refusing while the heading row
/// is folded
fn structural_edit(model: &mut AppModel, name: &str, op: fn(&mut GridStore)) -> Option<Cmd> {
    let locked = model.locale().strings().structure_locked;
    let Some(store) = model.sheet.table.store_mut() else {
        tracing::debug!(op = name, "structural edit rejected while header row is folded");
        model.ui.set_status(locked);
        return Some(Cmd::Redraw);
    };

    op(store);
    tracing::debug!(
        op = name,
        rows = store.row_count(),
        cols = store.column_count(),
        "table changed"
    );
    model.sync_viewport();
    Some(Cmd::Redraw)
}

fn toggle_header_edit(model: &mut AppModel) -> Option<Cmd> {
    let sheet = &mut model.sheet;
    sheet.table.toggle_header_mode();
    let folded = sheet.table.is_folded();

    // Keep the selection on the same cell as rows shift by the heading row
    sheet.selection = sheet.selection.and_then(|sel| {
        if folded {
            Some(CellPosition::new(sel.row + 1, sel.col))
        } else {
            sel.row.checked_sub(1).map(|row| CellPosition::new(row, sel.col))
        }
    });

    let strings = model.locale().strings();
    model.ui.set_status(if folded {
        strings.header_folded
    } else {
        strings.header_restored
    });
    tracing::debug!(folded, "header mode toggled");
    model.sync_viewport();
    Some(Cmd::Redraw)
}

fn sort_by_column(model: &mut AppModel, col: usize) -> Option<Cmd> {
    let direction = model.sheet.sort_direction;
    let strategy = model.config.sort.strategy;
    let Some(store) = model.sheet.table.store_mut() else {
        tracing::debug!(col, "sort ignored while header row is folded");
        return None;
    };
    let Some(heading) = store.headings().get(col).cloned() else {
        tracing::debug!(col, "sort requested for a missing column");
        return None;
    };

    let before = store.row_count();
    sort_rows(store.rows_mut(), col, direction, strategy);
    let after = store.row_count();
    tracing::debug!(col, ?direction, ?strategy, before, after, "sorted rows");

    model.sheet.sort_direction = direction.flipped();
    let status = model.locale().sorted_status(&heading, direction.is_descending());
    model.ui.set_status(status);
    model.sync_viewport();
    Some(Cmd::Redraw)
}

fn select_cell(model: &mut AppModel, position: CellPosition) -> Option<Cmd> {
    let table = &model.sheet.table;
    if position.row >= table.row_count() || position.col >= table.column_count() {
        return None;
    }
    model.sheet.selection = Some(position);
    model.ui.close_menu();
    Some(Cmd::Redraw)
}

fn move_selection(model: &mut AppModel, direction: Direction) -> Option<Cmd> {
    let rows = model.sheet.table.row_count();
    let cols = model.sheet.table.column_count();
    if rows == 0 || cols == 0 {
        return None;
    }

    let next = match model.sheet.selection {
        None => CellPosition::new(model.sheet.viewport.top_row.min(rows - 1), 0),
        Some(sel) => match direction {
            Direction::Up => CellPosition::new(sel.row.saturating_sub(1), sel.col),
            Direction::Down => CellPosition::new((sel.row + 1).min(rows - 1), sel.col),
            Direction::Left => CellPosition::new(sel.row, sel.col.saturating_sub(1)),
            Direction::Right => CellPosition::new(sel.row, (sel.col + 1).min(cols - 1)),
        },
    };

    model.sheet.selection = Some(next);
    model.sheet.reveal_selection();
    Some(Cmd::Redraw)
}
