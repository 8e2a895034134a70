//! Mouse event routing with hit-testing
//!
//! Menus sit on top of the table, so they are tested first. Hit-testing
//! uses the same geometry the renderer draws with.

use semicell::commands::Cmd;
use semicell::messages::{EditMsg, GridMsg, MenuMsg, Msg};
use semicell::model::AppModel;
use semicell::update::update;

/// Left button press at `(x, y)` in physical pixels
pub fn handle_left_press(model: &mut AppModel, x: f64, y: f64, double_click: bool) -> Option<Cmd> {
    let menu_layout = model.menu_layout();

    if let Some(open) = model.ui.menu.open {
        if let Some(item) = menu_layout.item_at(open, x, y) {
            return update(model, Msg::Menu(MenuMsg::Activate(item)));
        }
        // Any click away from the drop-down only dismisses it
        let msg = match menu_layout.title_at(x, y) {
            Some(menu) => MenuMsg::Open(menu),
            None => MenuMsg::Close,
        };
        return update(model, Msg::Menu(msg));
    }

    if let Some(menu) = menu_layout.title_at(x, y) {
        return update(model, Msg::Menu(MenuMsg::Open(menu)));
    }

    let layout = model.table_layout();
    let mut cmds = Vec::new();

    if let Some(edit) = &model.sheet.editing {
        let on_editor = layout
            .cell_rect(edit.position)
            .is_some_and(|rect| rect.contains(x, y));
        if on_editor {
            return None;
        }
        cmds.extend(update(model, Msg::Edit(EditMsg::Commit)));
    }

    let msg = if let Some(col) = layout.heading_at(x, y) {
        Some(Msg::Grid(GridMsg::SortByColumn(col)))
    } else if let Some(position) = layout.cell_at(x, y) {
        if double_click {
            Some(Msg::Edit(EditMsg::Begin(position)))
        } else {
            Some(Msg::Grid(GridMsg::SelectCell(position)))
        }
    } else {
        None
    };
    if let Some(msg) = msg {
        cmds.extend(update(model, msg));
    }

    (!cmds.is_empty()).then(|| Cmd::batch(cmds))
}

/// Pointer movement; only matters while a menu is open
pub fn handle_cursor_moved(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    let open = model.ui.menu.open?;
    let layout = model.menu_layout();

    if let Some(menu) = layout.title_at(x, y) {
        if menu != open {
            return update(model, Msg::Menu(MenuMsg::Open(menu)));
        }
    }
    let hovered = layout.item_at(open, x, y);
    update(model, Msg::Menu(MenuMsg::Hover(hovered)))
}

/// Wheel scrolling in rows and columns
pub fn handle_wheel(model: &mut AppModel, rows: i32, cols: i32) -> Option<Cmd> {
    let mut cmds = Vec::new();
    if rows != 0 {
        cmds.extend(update(model, Msg::Grid(GridMsg::Scroll(rows))));
    }
    if cols != 0 {
        cmds.extend(update(model, Msg::Grid(GridMsg::ScrollHorizontal(cols))));
    }
    (!cmds.is_empty()).then(|| Cmd::batch(cmds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use semicell::config::AppConfig;
    use semicell::grid::{CellPosition, GridStore};
    use semicell::menu::{MenuId, MenuItemId};
    use semicell::theme::Theme;

    fn model() -> AppModel {
        let mut model = AppModel::new(600, 400, AppConfig::default(), Theme::default());
        model.set_char_metrics(16, 8.0);
        model.sheet.replace(GridStore::with_data(
            vec!["b".into(), "a".into()],
            vec![
                vec!["2".into(), "x".into()],
                vec!["1".into(), "y".into()],
            ],
        ));
        model.sync_viewport();
        model
    }

    /// Center of a data cell
    fn cell_point(model: &AppModel, row: usize, col: usize) -> (f64, f64) {
        let rect = model
            .table_layout()
            .cell_rect(CellPosition::new(row, col))
            .unwrap();
        (
            (rect.x + rect.width / 2) as f64,
            (rect.y + rect.height / 2) as f64,
        )
    }

    #[test]
    fn test_click_selects_and_double_click_edits() {
        let mut model = model();
        let (x, y) = cell_point(&model, 1, 1);

        handle_left_press(&mut model, x, y, false);
        assert_eq!(model.sheet.selection, Some(CellPosition::new(1, 1)));
        assert!(!model.sheet.is_editing());

        handle_left_press(&mut model, x, y, true);
        let edit = model.sheet.editing.as_ref().unwrap();
        assert_eq!(edit.position, CellPosition::new(1, 1));
        assert_eq!(edit.text, "y");
    }

    #[test]
    fn test_heading_click_sorts() {
        let mut model = model();
        let rect = model.table_layout().heading_rect(0).unwrap();
        handle_left_press(&mut model, (rect.x + 5) as f64, (rect.y + 5) as f64, false);
        assert_eq!(model.sheet.table.cell(0, 0), "1");
        assert_eq!(model.sheet.table.cell(1, 0), "2");
    }

    #[test]
    fn test_click_outside_editor_commits() {
        let mut model = model();
        let (x, y) = cell_point(&model, 0, 0);
        handle_left_press(&mut model, x, y, true);
        model.sheet.editing.as_mut().unwrap().text = "changed".into();

        // Far below the last row
        handle_left_press(&mut model, x, 300.0, false);
        assert!(!model.sheet.is_editing());
        assert_eq!(model.sheet.table.cell(0, 0), "changed");
    }

    #[test]
    fn test_double_click_past_last_row_is_ignored() {
        let mut model = model();
        let (x, _) = cell_point(&model, 0, 0);
        assert!(handle_left_press(&mut model, x, 300.0, true).is_none());
        assert!(!model.sheet.is_editing());
    }

    #[test]
    fn test_menu_click_opens_and_runs_item() {
        let mut model = model();
        let layout = model.menu_layout();
        let title = layout.title_rect(MenuId::Edit).unwrap();
        handle_left_press(&mut model, (title.x + 2) as f64, 2.0, false);
        assert_eq!(model.ui.menu.open, Some(MenuId::Edit));

        let (_, item) = layout
            .item_rects(MenuId::Edit)
            .into_iter()
            .find(|(id, _)| *id == MenuItemId::AddRow)
            .unwrap();
        handle_left_press(
            &mut model,
            (item.x + 2) as f64,
            (item.y + 2) as f64,
            false,
        );
        assert_eq!(model.ui.menu.open, None);
        assert_eq!(model.sheet.table.row_count(), 3);
    }

    #[test]
    fn test_click_away_closes_menu_without_selecting() {
        let mut model = model();
        model.ui.menu.open = Some(MenuId::File);
        let (x, y) = cell_point(&model, 1, 1);
        handle_left_press(&mut model, x, y, false);
        assert_eq!(model.ui.menu.open, None);
        assert_eq!(model.sheet.selection, None);
    }

    #[test]
    fn test_hover_switches_between_open_menus() {
        let mut model = model();
        model.ui.menu.open = Some(MenuId::File);
        let title = model.menu_layout().title_rect(MenuId::Edit).unwrap();
        handle_cursor_moved(&mut model, (title.x + 2) as f64, 2.0);
        assert_eq!(model.ui.menu.open, Some(MenuId::Edit));
    }

    #[test]
    fn test_cursor_moved_without_menu_does_nothing() {
        let mut model = model();
        assert!(handle_cursor_moved(&mut model, 10.0, 10.0).is_none());
    }
}
